use crate::styles::base::{Helpers, Keyframes};
use loom::styling::error::DefinitionError;
use loom::styling::responsive::{BreakpointRules, StyleProps, responsive_style};
use loom::styling::scale::Scale;
use loom::styling::sprinkles::{Schema, one, span2, span3};
use loom::styling::stylesheet::{Part, Stylesheet};

/// Class attributes for the marketing/bio pages: home introduction, about,
/// experience, education, and contact.
pub struct PageStyles {
    pub home_container: String,
    pub intro_container: String,
    pub intro_heading: String,
    pub intro_tagline: String,
    pub graphic_container: String,
    pub prompt_line: String,
    pub prompt_path: String,
    pub prompt_command: String,
    pub headshot: String,
    pub paragraphs_container: String,
    pub paragraph: String,
    pub experience_item: String,
    pub company_logo: String,
    pub role_container: String,
    pub role_header: String,
    pub role_title: String,
    pub role_department: String,
    pub role_timeline: String,
    pub role_details: String,
    pub school_logo: String,
    pub contact_points: String,
    pub social_platforms: String,
    pub social_icon: String,
}

pub fn register(
    sheet: &mut Stylesheet,
    schema: &Schema,
    helpers: &Helpers,
    keyframes: &Keyframes,
    durations: &Scale,
    border_widths: &Scale,
    contract_text_strong: &str,
) -> Result<PageStyles, DefinitionError> {
    let home_container = sheet.style(
        "home-container",
        vec![
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("flexDirection", one("column")),
                ("p", span2("24", "48")),
                ("paddingTop", one("0")),
                ("gap", one("32")),
            ])?),
            Part::Classes(vec![helpers.min_full_height.clone()]),
        ],
    );

    let intro_container = sheet.style(
        "intro-container",
        vec![
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("flexDirection", span2("column", "row")),
                ("flexWrap", one("wrap")),
                ("justifyContent", one("space-between")),
                ("alignItems", one("center")),
                ("gap", span3("32", "32", "48")),
                ("paddingTop", one("32")),
            ])?),
            Part::Classes(vec![helpers.padding_for_header.clone()]),
            Part::Props(
                StyleProps::new()
                    .prop("max-width", "1100px")
                    .prop("align-self", "center")
                    .prop("width", "100%")
                    .prop("flex", "2")
                    .prop("animation-name", &keyframes.fade_up)
                    .prop("animation-duration", durations.get("3")?)
                    .prop("animation-timing-function", "ease-out"),
            ),
        ],
    );

    let intro_heading = sheet.style(
        "intro-heading",
        vec![Part::Classes(schema.apply(&[
            ("fontWeight", one("bold")),
            ("fontSize", span3("36", "44", "52")),
            ("color", one("textStrong")),
        ])?)],
    );
    let intro_tagline = sheet.style(
        "intro-tagline",
        vec![Part::Classes(schema.apply(&[
            ("fontSize", span2("18", "20")),
            ("color", one("textSubdued")),
        ])?)],
    );

    let graphic_container = sheet.style(
        "graphic-container",
        vec![
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("justifyContent", one("center")),
                ("alignItems", one("center")),
            ])?),
            Part::Props(StyleProps::new().prop("flex", "1")),
            Part::Merged(responsive_style(
                BreakpointRules::new()
                    .tablet(StyleProps::new().prop("align-items", "unset"))
                    .desktop(StyleProps::new().prop("flex", "unset")),
            )),
        ],
    );

    let prompt_line = sheet.style(
        "prompt-line",
        vec![Part::Classes(schema.apply(&[
            ("display", one("flex")),
            ("gap", one("8")),
            ("fontFamily", one("monospace")),
            ("fontSize", span2("14", "16")),
        ])?)],
    );
    let prompt_path = sheet.style(
        "prompt-path",
        vec![Part::Classes(schema.apply(&[("color", one("promptPath"))])?)],
    );
    let prompt_command = sheet.style(
        "prompt-command",
        vec![Part::Classes(schema.apply(&[("color", one("promptCommand"))])?)],
    );

    let headshot = sheet.style(
        "headshot",
        vec![
            Part::Classes(schema.apply(&[
                ("size", span3("160", "240", "240")),
                ("borderRadius", one("3")),
            ])?),
            Part::Props(
                StyleProps::new().prop("object-fit", "cover").prop(
                    "border",
                    &format!(
                        "solid {} {}",
                        border_widths.get("3")?,
                        contract_text_strong
                    ),
                ),
            ),
        ],
    );
    let paragraphs_container = sheet.style(
        "paragraphs-container",
        vec![Part::Classes(schema.apply(&[
            ("display", one("flex")),
            ("flexDirection", one("column")),
            ("gap", one("24")),
        ])?)],
    );
    let paragraph = sheet.style(
        "about-paragraph",
        vec![Part::Classes(schema.apply(&[
            ("fontSize", span2("16", "18")),
            ("color", one("text")),
        ])?)],
    );

    let experience_item = sheet.style(
        "experience-item",
        vec![
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("flexDirection", one("column")),
                ("alignItems", one("center")),
                ("gap", one("16")),
            ])?),
            Part::Props(StyleProps::new().prop("flex", "1").prop("width", "100%")),
        ],
    );
    let company_logo = sheet.style(
        "company-logo",
        vec![
            Part::Classes(schema.apply(&[("height", span2("48", "64"))])?),
            Part::Props(StyleProps::new().prop("object-fit", "contain")),
        ],
    );
    let role_container = sheet.style(
        "role-container",
        vec![Part::Classes(schema.apply(&[
            ("display", one("flex")),
            ("flexDirection", one("column")),
            ("alignSelf", one("flex-start")),
            ("gap", one("8")),
        ])?)],
    );
    let role_header = sheet.style(
        "role-header",
        vec![Part::Classes(schema.apply(&[
            ("display", one("flex")),
            ("flexDirection", one("column")),
            ("gap", one("2")),
        ])?)],
    );
    let role_title = sheet.style(
        "role-title",
        vec![Part::Classes(schema.apply(&[
            ("fontWeight", one("medium")),
            ("fontSize", span2("20", "24")),
        ])?)],
    );
    let role_department = sheet.style(
        "role-department",
        vec![Part::Classes(schema.apply(&[
            ("fontWeight", one("medium")),
            ("fontSize", span2("14", "16")),
        ])?)],
    );
    let role_timeline = sheet.style(
        "role-timeline",
        vec![Part::Classes(schema.apply(&[
            ("fontSize", span2("16", "18")),
            ("color", one("textSubdued")),
        ])?)],
    );
    let role_details = sheet.style(
        "role-details",
        vec![Part::Classes(schema.apply(&[
            ("display", one("flex")),
            ("flexDirection", one("column")),
            ("gap", one("8")),
            ("color", one("textSubdued")),
            ("fontSize", span2("14", "16")),
        ])?)],
    );

    let school_logo = sheet.style(
        "school-logo",
        vec![
            Part::Classes(schema.apply(&[("height", span2("60", "96"))])?),
            Part::Props(StyleProps::new().prop("object-fit", "contain")),
        ],
    );

    let contact_points = sheet.style(
        "contact-points",
        vec![Part::Classes(schema.apply(&[
            ("display", one("flex")),
            ("flexDirection", one("column")),
            ("alignItems", one("center")),
            ("gap", one("32")),
        ])?)],
    );
    let social_platforms = sheet.style(
        "social-platforms",
        vec![Part::Classes(schema.apply(&[
            ("display", one("flex")),
            ("gap", one("24")),
        ])?)],
    );
    let social_icon = sheet.style(
        "social-icon",
        vec![Part::Classes(schema.apply(&[("size", span2("60", "64"))])?)],
    );

    Ok(PageStyles {
        home_container,
        intro_container,
        intro_heading,
        intro_tagline,
        graphic_container,
        prompt_line,
        prompt_path,
        prompt_command,
        headshot,
        paragraphs_container,
        paragraph,
        experience_item,
        company_logo,
        role_container,
        role_header,
        role_title,
        role_department,
        role_timeline,
        role_details,
        school_logo,
        contact_points,
        social_platforms,
        social_icon,
    })
}
