use crate::components::chrome::page_section;
use crate::data::education::Education;
use crate::styles::SiteStyles;
use loom::prelude::*;

pub fn education(styles: &SiteStyles) -> Element {
    page_section(
        styles,
        "Education",
        crate::data::education::education_items()
            .iter()
            .map(|item| education_item(styles, item)),
    )
}

fn education_item(styles: &SiteStyles, item: &Education) -> Element {
    div()
        .class(&styles.pages.experience_item)
        .child(
            img()
                .class(&styles.pages.school_logo)
                .attr("src", item.logo_href)
                .attr("alt", &format!("{} logo", item.school)),
        )
        .child(
            div()
                .class(&styles.pages.role_container)
                .child(
                    div()
                        .class(&styles.pages.role_header)
                        .child(h3().class(&styles.pages.role_title).text(item.degree))
                        .child(
                            span()
                                .class(&styles.pages.role_department)
                                .text(item.field),
                        ),
                )
                .child(span().class(&styles.pages.role_timeline).text(item.timeline))
                .child(
                    ul().class(&styles.pages.role_details).children(
                        item.extracurriculars.iter().map(|entry| li().text(entry)),
                    ),
                ),
        )
}
