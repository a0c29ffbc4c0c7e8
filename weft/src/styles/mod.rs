use crate::config::SiteConfig;
use loom::styling::error::DefinitionError;
use loom::styling::stylesheet::Stylesheet;
use loom::styling::theme::ThemeVariant;

pub mod base;
pub mod blog;
pub mod chrome;
pub mod pages;
pub mod scales;
pub mod schema;
pub mod theme;

/// Everything the page components need from the style layer: the rendered
/// stylesheet and the class attribute for each styled element. Built once at
/// startup and passed by reference; there is no global style registry.
pub struct SiteStyles {
    pub css: String,
    pub light: ThemeVariant,
    pub dark: ThemeVariant,
    pub helpers: base::Helpers,
    pub chrome: chrome::ChromeStyles,
    pub pages: pages::PageStyles,
    pub blog: blog::BlogStyles,
}

pub fn build(config: &SiteConfig) -> Result<SiteStyles, DefinitionError> {
    let theme = theme::site_theme()?;
    let schema = schema::schema(&theme.contract)?;
    let durations = scales::durations()?;
    let font_sizes = scales::font_sizes()?;
    let border_widths = scales::border_widths()?;

    let mut sheet = Stylesheet::new();
    base::register_fonts(&mut sheet);
    let keyframes = base::register_keyframes(&mut sheet);
    sheet.theme(&theme.light);
    sheet.theme(&theme.dark);
    base::register_globals(&mut sheet, &theme.contract)?;
    sheet.include_schema(&schema);
    let helpers = base::register_helpers(&mut sheet, &theme.contract)?;
    let chrome = chrome::register(
        &mut sheet,
        &schema,
        &helpers,
        &keyframes,
        &durations,
        &font_sizes,
    )?;
    let text_strong = theme.contract.var("textStrong")?;
    let page_styles = pages::register(
        &mut sheet,
        &schema,
        &helpers,
        &keyframes,
        &durations,
        &border_widths,
        &text_strong,
    )?;
    let blog_styles = blog::register(
        &mut sheet,
        &schema,
        &keyframes,
        &durations,
        &font_sizes,
        &config.code_colors,
    )?;

    Ok(SiteStyles {
        css: sheet.render(),
        light: theme.light,
        dark: theme.dark,
        helpers,
        chrome,
        pages: page_styles,
        blog: blog_styles,
    })
}
