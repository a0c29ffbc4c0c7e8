use loom::styling::error::DefinitionError;
use loom::styling::scale::Scale;

pub fn font_families() -> Result<Scale, DefinitionError> {
    Scale::define(
        "fontFamilies",
        &[
            ("sanSerif", "\"Poppins\", sans-serif"),
            ("monospace", "Courier, monospace"),
        ],
    )
}

pub fn font_weights() -> Result<Scale, DefinitionError> {
    Scale::define(
        "fontWeights",
        &[("regular", "400"), ("medium", "500"), ("bold", "700")],
    )
}

pub fn font_sizes() -> Result<Scale, DefinitionError> {
    Scale::define(
        "fontSizes",
        &[
            ("12", "0.75rem"),
            ("14", "0.875rem"),
            ("16", "1rem"),
            ("18", "1.125rem"),
            ("20", "1.25rem"),
            ("24", "1.5rem"),
            ("28", "1.75rem"),
            ("32", "2rem"),
            ("36", "2.25rem"),
            ("40", "2.5rem"),
            ("44", "2.75rem"),
            ("52", "3.25rem"),
            ("96", "6rem"),
        ],
    )
}

pub fn border_widths() -> Result<Scale, DefinitionError> {
    Scale::define(
        "borderWidths",
        &[
            ("0", "0px"),
            ("1", "1px"),
            ("2", "2px"),
            ("3", "4px"),
            ("4", "6px"),
        ],
    )
}

pub fn radii() -> Result<Scale, DefinitionError> {
    Scale::define(
        "radii",
        &[
            ("0", "0px"),
            ("1", "2px"),
            ("2", "4px"),
            ("3", "8px"),
            ("4", "16px"),
            ("round", "9999px"),
        ],
    )
}

pub fn spaces() -> Result<Scale, DefinitionError> {
    Scale::define(
        "spaces",
        &[
            ("0", "0px"),
            ("2", "2px"),
            ("4", "4px"),
            ("8", "8px"),
            ("12", "12px"),
            ("16", "16px"),
            ("20", "20px"),
            ("24", "24px"),
            ("32", "32px"),
            ("40", "40px"),
            ("48", "48px"),
            ("60", "60px"),
            ("64", "64px"),
            ("96", "96px"),
            ("160", "160px"),
            ("240", "240px"),
        ],
    )
}

pub fn durations() -> Result<Scale, DefinitionError> {
    Scale::define(
        "durations",
        &[("1", "0.15s"), ("2", "0.3s"), ("3", "0.6s")],
    )
}

pub const FONT_STYLES: [&str; 2] = ["normal", "italic"];
