use crate::components::chrome::page_section;
use crate::data::experience::{Experience, ExperienceRole};
use crate::styles::SiteStyles;
use loom::prelude::*;

pub fn experience(styles: &SiteStyles) -> Element {
    page_section(
        styles,
        "Experience",
        crate::data::experience::experience_items()
            .iter()
            .map(|item| experience_item(styles, item)),
    )
}

fn experience_item(styles: &SiteStyles, item: &Experience) -> Element {
    div()
        .class(&styles.pages.experience_item)
        .child(
            img()
                .class(&styles.pages.company_logo)
                .attr("src", item.logo_href)
                .attr("alt", &format!("{} logo", item.company_name)),
        )
        .children(item.roles.iter().map(|role| role_entry(styles, role)))
}

fn role_entry(styles: &SiteStyles, role: &ExperienceRole) -> Element {
    div()
        .class(&styles.pages.role_container)
        .child(
            div()
                .class(&styles.pages.role_header)
                .child(h3().class(&styles.pages.role_title).text(role.title))
                .child(
                    span()
                        .class(&styles.pages.role_department)
                        .text(role.department),
                ),
        )
        .child(span().class(&styles.pages.role_timeline).text(role.timeline))
        .child(
            ul().class(&styles.pages.role_details)
                .children(role.details.iter().map(|detail| li().text(detail))),
        )
}
