use crate::components::chrome::page_section;
use crate::styles::SiteStyles;
use loom::prelude::*;

const SOCIAL_PLATFORMS: [(&str, &str, &str); 3] = [
    ("GitHub", "https://github.com/devonreed", "fa-brands fa-github"),
    (
        "LinkedIn",
        "https://www.linkedin.com/in/devonreed",
        "fa-brands fa-linkedin",
    ),
    (
        "Email",
        "mailto:devon.reed@protonmail.com",
        "fa-solid fa-envelope",
    ),
];

pub fn contact(styles: &SiteStyles) -> Element {
    page_section(
        styles,
        "Contact",
        [div()
            .class(&styles.pages.contact_points)
            .child(
                p().class(&styles.pages.paragraph)
                    .text("The fastest way to reach me is email. I'm also happy to connect anywhere below."),
            )
            .child(
                div().class(&styles.pages.social_platforms).children(
                    SOCIAL_PLATFORMS.iter().map(|(label, href, icon)| {
                        a().attr("href", href)
                            .attr("aria-label", label)
                            .child(i().class(icon).class(&styles.pages.social_icon))
                    }),
                ),
            )],
    )
}
