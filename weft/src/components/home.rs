use crate::styles::SiteStyles;
use loom::prelude::*;

pub fn home(styles: &SiteStyles) -> Element {
    div().class(&styles.pages.home_container).child(
        div()
            .class(&styles.pages.intro_container)
            .child(introduction(styles))
            .child(
                div()
                    .class(&styles.pages.graphic_container)
                    .child(terminal_graphic(styles)),
            ),
    )
}

fn introduction(styles: &SiteStyles) -> Element {
    div()
        .child(h1().class(&styles.pages.intro_heading).text("Devon Reed"))
        .child(
            p().class(&styles.pages.intro_tagline)
                .text("Software engineer building design systems and the tools around them."),
        )
        .child(
            a().class(&styles.chrome.link_button)
                .class(&styles.chrome.round_button)
                .class(&styles.chrome.rectangle_button)
                .attr("href", "/contact/")
                .text("Get in touch"),
        )
}

fn terminal_graphic(styles: &SiteStyles) -> Element {
    let line = |path: &str, command: &str| {
        div()
            .class(&styles.pages.prompt_line)
            .child(span().class(&styles.pages.prompt_path).text(path))
            .child(span().class(&styles.pages.prompt_command).text(command))
    };
    div()
        .child(line("~/site", "cargo run --release"))
        .child(line("~/site", "open dist/index.html"))
}
