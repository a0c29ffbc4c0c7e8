use crate::styles::scales;
use loom::styling::error::DefinitionError;
use loom::styling::sprinkles::Schema;
use loom::styling::theme::ThemeContract;

const FLEX_ALIGNMENTS: [&str; 6] = [
    "stretch",
    "flex-start",
    "center",
    "flex-end",
    "space-between",
    "space-around",
];

/// The site's atomic-class schema. Every property draws its legal values from
/// the scale tables or the theme contract, so an undefined token is caught
/// here rather than surfacing as an unstyled element.
pub fn schema(contract: &ThemeContract) -> Result<Schema, DefinitionError> {
    let font_families = scales::font_families()?;
    let font_weights = scales::font_weights()?;
    let font_sizes = scales::font_sizes()?;
    let radii = scales::radii()?;
    let spaces = scales::spaces()?;

    Schema::builder()
        .responsive_values("display", &["none", "block", "inline", "flex"])
        .responsive_values("flexDirection", &["row", "column"])
        .responsive_values("flexWrap", &["wrap", "wrap-reverse", "nowrap"])
        .responsive_values("justifyContent", &FLEX_ALIGNMENTS)
        .responsive_values("alignItems", &FLEX_ALIGNMENTS)
        .responsive_values("justifySelf", &FLEX_ALIGNMENTS)
        .responsive_values("alignSelf", &FLEX_ALIGNMENTS)
        .responsive_vars("color", contract)
        .responsive_vars("backgroundColor", contract)
        .responsive_scale("height", &spaces)
        .responsive_scale("width", &spaces)
        .responsive_scale("gap", &spaces)
        .responsive_scale("paddingTop", &spaces)
        .responsive_scale("paddingBottom", &spaces)
        .responsive_scale("paddingLeft", &spaces)
        .responsive_scale("paddingRight", &spaces)
        .responsive_scale("marginTop", &spaces)
        .responsive_scale("marginBottom", &spaces)
        .responsive_scale("marginLeft", &spaces)
        .responsive_scale("marginRight", &spaces)
        .responsive_scale("borderRadius", &radii)
        .responsive_scale("fontFamily", &font_families)
        .responsive_values("fontStyle", &scales::FONT_STYLES)
        .responsive_scale("fontWeight", &font_weights)
        .responsive_scale("fontSize", &font_sizes)
        .shorthand("bg", &["backgroundColor"])
        .shorthand("size", &["height", "width"])
        .shorthand(
            "p",
            &["paddingTop", "paddingBottom", "paddingLeft", "paddingRight"],
        )
        .shorthand("px", &["paddingLeft", "paddingRight"])
        .shorthand("py", &["paddingTop", "paddingBottom"])
        .shorthand(
            "m",
            &["marginTop", "marginBottom", "marginLeft", "marginRight"],
        )
        .shorthand("mx", &["marginLeft", "marginRight"])
        .shorthand("my", &["marginTop", "marginBottom"])
        .build()
}
