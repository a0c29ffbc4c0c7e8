use crate::config::CodeColors;
use crate::styles::base::Keyframes;
use loom::styling::css::CssRule;
use loom::styling::error::DefinitionError;
use loom::styling::responsive::{BreakpointRules, StyleProps, responsive_style};
use loom::styling::scale::Scale;
use loom::styling::sprinkles::{Schema, one, span2};
use loom::styling::stylesheet::{Part, Stylesheet};

/// Class attributes for the blog listing and the post renderer.
pub struct BlogStyles {
    pub entry_list_container: String,
    pub entry_list: String,
    pub list_heading: String,
    pub entry: String,
    pub entry_title: String,
    pub entry_date: String,
    pub entry_description: String,
    pub post_container: String,
    pub post: String,
    pub post_heading: String,
    pub post_details: String,
    pub divider: String,
    pub post_content: String,
}

pub fn register(
    sheet: &mut Stylesheet,
    schema: &Schema,
    keyframes: &Keyframes,
    durations: &Scale,
    font_sizes: &Scale,
    code_colors: &CodeColors,
) -> Result<BlogStyles, DefinitionError> {
    let entry_list_container = sheet.style(
        "entry-list-container",
        vec![Part::Classes(schema.apply(&[
            ("display", one("flex")),
            ("justifyContent", one("center")),
        ])?)],
    );
    let entry_list = sheet.style(
        "entry-list",
        vec![
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("flexDirection", one("column")),
                ("p", span2("24", "32")),
                ("gap", span2("32", "48")),
            ])?),
            Part::Props(
                StyleProps::new()
                    .prop("width", "100%")
                    .prop("max-width", "80ch"),
            ),
        ],
    );
    let list_heading = sheet.style(
        "list-heading",
        vec![Part::Classes(schema.apply(&[
            ("fontWeight", one("bold")),
            ("fontSize", span2("24", "40")),
            ("color", one("textStrong")),
        ])?)],
    );
    let entry = sheet.style(
        "blog-entry",
        vec![Part::Classes(schema.apply(&[
            ("bg", one("surface2")),
            ("borderRadius", one("2")),
            ("p", one("16")),
        ])?)],
    );
    let entry_title = sheet.style(
        "entry-title",
        vec![
            Part::Classes(schema.apply(&[
                ("fontWeight", one("bold")),
                ("fontSize", span2("18", "20")),
                ("color", one("textStrong")),
            ])?),
            Part::Props(StyleProps::new().prop("line-height", "1.25")),
        ],
    );
    let entry_date = sheet.style(
        "entry-date",
        vec![Part::Classes(schema.apply(&[
            ("fontSize", span2("12", "14")),
            ("color", one("textSubdued")),
            ("marginTop", one("4")),
            ("marginBottom", one("8")),
        ])?)],
    );
    let entry_description = sheet.style(
        "entry-description",
        vec![Part::Classes(schema.apply(&[
            ("fontSize", span2("14", "16")),
            ("color", one("text")),
        ])?)],
    );

    let post_container = sheet.style(
        "post-container",
        vec![
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("justifyContent", one("center")),
            ])?),
            Part::Props(
                StyleProps::new()
                    .prop("animation-name", &keyframes.fade_up)
                    .prop("animation-duration", durations.get("3")?)
                    .prop("animation-timing-function", "ease-out"),
            ),
        ],
    );
    let post = sheet.style(
        "blog-post",
        vec![
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("flexDirection", one("column")),
                ("p", span2("24", "32")),
                ("gap", span2("24", "32")),
            ])?),
            Part::Props(
                StyleProps::new()
                    .prop("width", "100%")
                    .prop("max-width", "80ch"),
            ),
        ],
    );
    let post_heading = sheet.style(
        "post-heading",
        vec![
            Part::Classes(schema.apply(&[
                ("fontWeight", one("bold")),
                ("fontSize", span2("24", "40")),
                ("color", one("textStrong")),
            ])?),
            Part::Props(StyleProps::new().prop("line-height", "1.25")),
        ],
    );
    let post_details = sheet.style(
        "post-details",
        vec![Part::Classes(schema.apply(&[("color", one("textSubdued"))])?)],
    );
    let divider = sheet.style(
        "divider",
        vec![
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("bg", one("border")),
                ("borderRadius", one("round")),
                ("my", one("16")),
            ])?),
            Part::Props(StyleProps::new().prop("height", "1px")),
        ],
    );
    // Post body typography targets rendered markdown, not authored classes,
    // so it nests descendant rules under the composition's own class.
    let post_content = sheet.style(
        "post-content",
        vec![
            Part::Classes(schema.apply(&[
                ("display", one("flex")),
                ("flexDirection", one("column")),
                ("gap", one("24")),
            ])?),
            Part::Nested(
                CssRule::new("& p, & ul")
                    .property("line-height", "1.75")
                    .property("font-size", font_sizes.get("16")?),
            ),
            Part::Nested(
                CssRule::new("& pre")
                    .property("background-color", &code_colors.background)
                    .property("color", &code_colors.text)
                    .property("padding", "16px")
                    .property("border-radius", "8px")
                    .property("overflow-x", "auto"),
            ),
        ],
    );
    sheet.global_merged(
        ".post-content p, .post-content ul",
        &responsive_style(
            BreakpointRules::new()
                .tablet(StyleProps::new().prop("font-size", font_sizes.get("18")?)),
        ),
    );

    Ok(BlogStyles {
        entry_list_container,
        entry_list,
        list_heading,
        entry,
        entry_title,
        entry_date,
        entry_description,
        post_container,
        post,
        post_heading,
        post_details,
        divider,
        post_content,
    })
}
