use crate::styles::SiteStyles;
use loom::prelude::*;

pub const NAV_PAGES: [(&str, &str); 5] = [
    ("About", "/about/"),
    ("Experience", "/experience/"),
    ("Education", "/education/"),
    ("Blog", "/blog/"),
    ("Contact", "/contact/"),
];

pub fn page_header(styles: &SiteStyles, default_scheme: &str) -> Element {
    header().class(&styles.chrome.header).child(
        a().attr("href", "/")
            .attr("aria-label", "Home")
            .child(
                img()
                    .class(&styles.chrome.logo)
                    .attr("src", "/images/logo.svg")
                    .attr("alt", ""),
            ),
    )
    .child(
        nav()
            .class(&styles.chrome.nav)
            .children(NAV_PAGES.iter().map(|(label, href)| {
                a().class(&styles.chrome.nav_item)
                    .attr("href", href)
                    .text(label)
            }))
            .child(theme_toggle(styles, default_scheme)),
    )
}

fn theme_toggle(styles: &SiteStyles, default_scheme: &str) -> Element {
    button()
        .attr("id", "theme-toggle")
        .attr("data-color-scheme", default_scheme)
        .class(&styles.chrome.theme_toggle)
        .child(
            span()
                .class(&styles.helpers.visually_hide)
                .text("Toggle color theme"),
        )
        .child(i().class("fa-solid fa-sun").class(&styles.chrome.sun_icon))
        .child(i().class("fa-solid fa-moon").class(&styles.chrome.moon_icon))
}

pub fn page_footer(styles: &SiteStyles) -> Element {
    footer().class(&styles.chrome.footer).child(
        p().class(&styles.chrome.footer_text)
            .text("Designed and built by Devon Reed."),
    )
}

/// Shared layout for the centered content pages: a heading above a single
/// constrained column.
pub fn page_section(
    styles: &SiteStyles,
    heading: &str,
    children: impl IntoIterator<Item = Element>,
) -> Element {
    section().class(&styles.chrome.section_container).child(
        div()
            .class(&styles.chrome.section_contents)
            .child(h2().class(&styles.chrome.section_heading).text(heading))
            .children(children),
    )
}
