use crate::styles::base::{Helpers, Keyframes};
use loom::styling::css::CssRule;
use loom::styling::error::DefinitionError;
use loom::styling::responsive::{BreakpointRules, StyleProps, responsive_style};
use loom::styling::scale::Scale;
use loom::styling::sprinkles::{Schema, one, span2, span3};
use loom::styling::stylesheet::{Part, Stylesheet};

/// Class attributes for the page chrome: fixed header with nav and theme
/// toggle, section layout, buttons, and the footer.
pub struct ChromeStyles {
    pub header: String,
    pub logo: String,
    pub nav: String,
    pub nav_item: String,
    pub theme_toggle: String,
    pub sun_icon: String,
    pub moon_icon: String,
    pub link_button: String,
    pub round_button: String,
    pub rectangle_button: String,
    pub section_container: String,
    pub section_contents: String,
    pub section_heading: String,
    pub footer: String,
    pub footer_text: String,
}

pub fn register(
    sheet: &mut Stylesheet,
    schema: &Schema,
    helpers: &Helpers,
    keyframes: &Keyframes,
    durations: &Scale,
    font_sizes: &Scale,
) -> Result<ChromeStyles, DefinitionError> {
    let header = sheet.style(
        "site-header",
        vec![
            Part::Classes(vec![helpers.translucent_surface.clone()]),
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("alignItems", one("center")),
                ("justifyContent", one("space-between")),
                ("px", span2("24", "48")),
                ("py", span2("16", "32")),
                ("gap", span3("24", "32", "48")),
            ])?),
            Part::Props(
                StyleProps::new()
                    .prop("position", "fixed")
                    .prop("top", "0")
                    .prop("left", "0")
                    .prop("right", "0")
                    .prop("z-index", "1")
                    .prop("opacity", "0")
                    .prop("animation-name", &keyframes.fade_in)
                    .prop("animation-duration", durations.get("3")?)
                    .prop("animation-delay", durations.get("1")?)
                    .prop("animation-timing-function", "ease-out")
                    .prop("animation-fill-mode", "forwards"),
            ),
        ],
    );

    let logo = sheet.style(
        "site-logo",
        vec![
            Part::Props(StyleProps::new().prop("flex-shrink", "0")),
            Part::Merged(responsive_style(
                BreakpointRules::new()
                    .mobile(
                        StyleProps::new()
                            .prop("height", font_sizes.get("24")?)
                            .prop("width", font_sizes.get("24")?),
                    )
                    .tablet(
                        StyleProps::new()
                            .prop("height", font_sizes.get("32")?)
                            .prop("width", font_sizes.get("32")?),
                    ),
            )),
        ],
    );

    let nav = sheet.style(
        "site-nav",
        vec![Part::Classes(schema.apply(&[
            ("display", one("flex")),
            ("alignItems", one("center")),
            ("gap", span3("24", "32", "48")),
            ("color", one("textStrong")),
        ])?)],
    );

    let nav_item = sheet.style(
        "nav-item",
        vec![
            Part::Classes(schema.apply(&[
                ("color", one("textStrong")),
                ("fontSize", span2("16", "20")),
            ])?),
            Part::Props(StyleProps::new().prop("text-decoration", "none")),
        ],
    );

    let theme_toggle = sheet.style(
        "theme-toggle",
        vec![
            Part::Classes(schema.apply(&[("size", span2("20", "24"))])?),
            Part::Props(StyleProps::new().prop("position", "relative")),
        ],
    );

    let transition = format!(
        "opacity {duration} ease, transform {duration} ease",
        duration = durations.get("2")?
    );
    let theme_icon = sheet.style(
        "theme-icon",
        vec![
            Part::Classes(schema.apply(&[("size", span2("20", "24"))])?),
            Part::Props(
                StyleProps::new()
                    .prop("position", "absolute")
                    .prop("inset", "0")
                    .prop("transition", &transition),
            ),
        ],
    );
    let sun_icon = format!(
        "{theme_icon} {}",
        sheet.style(
            "sun-icon",
            vec![Part::Nested(
                CssRule::new("button[data-color-scheme='dark'] > &")
                    .property("opacity", "0")
                    .property("transform", "rotate(-90deg)"),
            )],
        )
    );
    let moon_icon = format!(
        "{theme_icon} {}",
        sheet.style(
            "moon-icon",
            vec![Part::Nested(
                CssRule::new("button[data-color-scheme='light'] > &")
                    .property("opacity", "0")
                    .property("transform", "rotate(90deg)"),
            )],
        )
    );

    let button = sheet.style(
        "button-base",
        vec![
            Part::Classes(schema.apply(&[
                ("color", one("textStrong")),
                ("bg", one("surface3")),
            ])?),
            Part::Props(StyleProps::new().prop("line-height", "0")),
        ],
    );
    let link_button = format!(
        "{button} {}",
        sheet.style(
            "link-button",
            vec![Part::Props(
                StyleProps::new().prop("text-decoration", "none")
            )],
        )
    );
    let round_button = sheet.style(
        "round-button",
        vec![Part::Classes(schema.apply(&[("borderRadius", one("round"))])?)],
    );
    let rectangle_button = sheet.style(
        "rectangle-button",
        vec![Part::Classes(schema.apply(&[
            ("px", one("12")),
            ("py", one("8")),
        ])?)],
    );

    let section_container = sheet.style(
        "section-container",
        vec![
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("flexDirection", one("column")),
                ("alignItems", one("center")),
                ("p", span2("24", "48")),
            ])?),
            Part::Classes(vec![helpers.padding_for_header.clone()]),
        ],
    );
    let section_contents = sheet.style(
        "section-contents",
        vec![
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("flexDirection", one("column")),
                ("alignItems", one("center")),
                ("gap", span2("48", "64")),
            ])?),
            Part::Props(
                StyleProps::new()
                    .prop("width", "100%")
                    .prop("max-width", "60ch"),
            ),
        ],
    );
    let section_heading = sheet.style(
        "section-heading",
        vec![Part::Classes(schema.apply(&[
            ("fontWeight", one("bold")),
            ("fontSize", span2("20", "28")),
            ("color", one("textSubdued")),
        ])?)],
    );

    let footer = sheet.style(
        "site-footer",
        vec![Part::Classes(schema.apply(&[
            ("display", one("flex")),
            ("justifyContent", one("center")),
            ("px", one("16")),
            ("paddingTop", one("48")),
            ("paddingBottom", one("24")),
        ])?)],
    );
    let footer_text = sheet.style(
        "footer-text",
        vec![
            Part::Classes(schema.apply(&[
                ("fontSize", one("12")),
                ("color", one("textSubdued")),
            ])?),
            Part::Props(StyleProps::new().prop("text-align", "center")),
        ],
    );

    Ok(ChromeStyles {
        header,
        logo,
        nav,
        nav_item,
        theme_toggle,
        sun_icon,
        moon_icon,
        link_button,
        round_button,
        rectangle_button,
        section_container,
        section_contents,
        section_heading,
        footer,
        footer_text,
    })
}
