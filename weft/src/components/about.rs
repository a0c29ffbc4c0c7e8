use crate::components::chrome::page_section;
use crate::styles::SiteStyles;
use loom::prelude::*;

const PARAGRAPHS: [&str; 3] = [
    "I'm a software engineer who cares most about the space where design and \
     engineering meet: design systems, component libraries, and the build \
     tooling that keeps them honest.",
    "Most of my work has been on web platforms for operations-heavy products, \
     where a consistent interface is the difference between a calm shift and a \
     chaotic one. I like constraints, small vocabularies, and deleting CSS.",
    "Away from the keyboard I'm usually hiking, fixing up an old bicycle, or \
     trying to keep a sourdough starter alive.",
];

pub fn about(styles: &SiteStyles) -> Element {
    page_section(
        styles,
        "About Me",
        [
            img()
                .class(&styles.pages.headshot)
                .attr("src", "/images/headshot.jpg")
                .attr("alt", "Portrait of Devon Reed"),
            div()
                .class(&styles.pages.paragraphs_container)
                .children(
                    PARAGRAPHS
                        .iter()
                        .map(|text| p().class(&styles.pages.paragraph).text(text)),
                ),
        ],
    )
}
