use crate::components::{about, blog, chrome, contact, education, experience, home};
use crate::config::SiteConfig;
use crate::data::posts::{Post, posts};
use crate::styles::{self, SiteStyles};
use anyhow::{Context, Result, bail};
use loom::js::theme::{theme_boot_js, theme_toggle_js};
use loom::prelude::*;
use std::fs;
use std::path::Path;

const FONT_AWESOME_HREF: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.7.2/css/all.min.css";
const STYLESHEET_HREF: &str = "/assets/css/style.css";
const THEME_SCRIPT_HREF: &str = "/assets/js/theme.js";

/// A page to emit: its URL path (always directory-style, ending in `/`),
/// head metadata, and the page body. The output file path and the sitemap
/// are both derived from `location`.
struct Page {
    location: String,
    title: String,
    description: String,
    content: Element,
}

impl Page {
    fn output_path(&self) -> String {
        format!("{}index.html", self.location.trim_start_matches('/'))
    }
}

pub struct Site {
    config: SiteConfig,
    styles: SiteStyles,
    posts: Vec<Post>,
}

impl Site {
    pub fn new(config: SiteConfig) -> Result<Self> {
        if config.default_theme != "light" && config.default_theme != "dark" {
            bail!("unknown default theme '{}'", config.default_theme);
        }
        let styles = styles::build(&config)?;
        Ok(Self {
            config,
            styles,
            posts: posts(),
        })
    }

    fn default_variant(&self) -> &loom::styling::theme::ThemeVariant {
        if self.config.default_theme == "dark" {
            &self.styles.dark
        } else {
            &self.styles.light
        }
    }

    fn page(&self, title: &str, description: &str, content: Element) -> String {
        PageBuilder::new()
            .title(title)
            .description(description)
            .links(vec![
                Link::new("stylesheet", STYLESHEET_HREF),
                Link::new("stylesheet", FONT_AWESOME_HREF),
            ])
            .scripts(vec![
                Script::inline(&theme_boot_js(self.default_variant())),
                Script::new(THEME_SCRIPT_HREF),
            ])
            .content(
                div()
                    .child(chrome::page_header(
                        &self.styles,
                        self.default_variant().name(),
                    ))
                    .child(content)
                    .child(chrome::page_footer(&self.styles)),
            )
            .build()
    }

    fn pages(&self) -> Result<Vec<Page>> {
        let mut pages = vec![
            Page {
                location: "/".to_string(),
                title: "Devon Reed".to_string(),
                description: "Devon Reed is a software engineer focused on design systems \
                              and web tooling."
                    .to_string(),
                content: home::home(&self.styles),
            },
            Page {
                location: "/about/".to_string(),
                title: "About - Devon Reed".to_string(),
                description: "About Devon Reed.".to_string(),
                content: about::about(&self.styles),
            },
            Page {
                location: "/experience/".to_string(),
                title: "Experience - Devon Reed".to_string(),
                description: "Devon Reed's professional experience.".to_string(),
                content: experience::experience(&self.styles),
            },
            Page {
                location: "/education/".to_string(),
                title: "Education - Devon Reed".to_string(),
                description: "Devon Reed's education.".to_string(),
                content: education::education(&self.styles),
            },
            Page {
                location: "/blog/".to_string(),
                title: "Blog - Devon Reed".to_string(),
                description: "Writing on design systems, theming, and web tooling."
                    .to_string(),
                content: blog::blog_index(&self.styles, &self.posts)?,
            },
            Page {
                location: "/contact/".to_string(),
                title: "Contact - Devon Reed".to_string(),
                description: "How to reach Devon Reed.".to_string(),
                content: contact::contact(&self.styles),
            },
        ];
        for post in &self.posts {
            pages.push(Page {
                location: format!("/blog/{}/", post.slug),
                title: format!("{} - Devon Reed", post.title),
                description: post.description.to_string(),
                content: blog::blog_post(&self.styles, post)?,
            });
        }
        Ok(pages)
    }

    fn sitemap(&self, pages: &[Page]) -> String {
        let urls = pages
            .iter()
            .map(|page| {
                format!(
                    "    <url><loc>{}{}</loc></url>",
                    self.config.origin, page.location
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}\n</urlset>\n"
        )
    }

    /// Renders every artifact under `out_dir`: the stylesheet, the theme
    /// script, one HTML file per page, and the sitemap.
    pub fn write(&self, out_dir: &Path) -> Result<()> {
        let css_path = out_dir.join("assets/css/style.css");
        write_artifact(&css_path, &self.styles.css)?;

        let theme_js = theme_toggle_js(
            self.default_variant(),
            &[&self.styles.light, &self.styles.dark],
        );
        write_artifact(&out_dir.join("assets/js/theme.js"), &theme_js)?;

        let pages = self.pages()?;
        for page in &pages {
            let html = self.page(&page.title, &page.description, page.content.clone());
            write_artifact(&out_dir.join(page.output_path()), &html)?;
        }

        write_artifact(&out_dir.join("sitemap.xml"), &self.sitemap(&pages))?;
        Ok(())
    }
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
