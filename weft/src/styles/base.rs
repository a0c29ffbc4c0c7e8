use loom::styling::css::CssRule;
use loom::styling::error::DefinitionError;
use loom::styling::responsive::{
    BreakpointRules, StyleProps, dark_mode_style, responsive_style,
};
use loom::styling::stylesheet::{Part, Stylesheet};
use loom::styling::theme::ThemeContract;

pub struct Keyframes {
    pub fade_in: String,
    pub fade_up: String,
}

pub struct Helpers {
    pub visually_hide: String,
    pub min_full_height: String,
    pub translucent_surface: String,
    pub padding_for_header: String,
}

pub fn register_fonts(sheet: &mut Stylesheet) {
    for weight in ["400", "500", "700"] {
        sheet.font_face(
            "Poppins",
            &format!("url('/fonts/poppins-latin-{weight}-normal.woff2') format('woff2')"),
            weight,
        );
    }
}

pub fn register_keyframes(sheet: &mut Stylesheet) -> Keyframes {
    let fade_in = sheet.keyframes(
        "fade-in",
        &[
            ("0%", StyleProps::new().prop("opacity", "0")),
            ("100%", StyleProps::new().prop("opacity", "1")),
        ],
    );
    let fade_up = sheet.keyframes(
        "fade-up",
        &[
            (
                "0%",
                StyleProps::new()
                    .prop("opacity", "0")
                    .prop("transform", "translateY(10svh)"),
            ),
            (
                "100%",
                StyleProps::new()
                    .prop("opacity", "1")
                    .prop("transform", "translateY(0svh)"),
            ),
        ],
    );
    Keyframes { fade_in, fade_up }
}

pub fn register_globals(
    sheet: &mut Stylesheet,
    contract: &ThemeContract,
) -> Result<(), DefinitionError> {
    sheet.global(
        "*, ::before, ::after",
        StyleProps::new().prop("box-sizing", "border-box"),
    );
    // Hint the UA about form controls and scrollbars; the explicit theme
    // class still decides actual colors.
    sheet.global("html", StyleProps::new().prop("color-scheme", "light"));
    sheet.global_merged(
        "html",
        &dark_mode_style(StyleProps::new().prop("color-scheme", "dark")),
    );
    sheet.global(
        "body",
        StyleProps::new()
            .prop("margin", "0")
            .prop("padding", "0")
            .prop("color", &contract.var("text")?)
            .prop("background-color", &contract.var("surface")?)
            .prop("font-family", "\"Poppins\", sans-serif"),
    );
    sheet.global(
        "h1, h2, h3, h4, h5, h6, p, pre, figure",
        StyleProps::new().prop("margin", "0"),
    );
    sheet.global(
        "button",
        StyleProps::new()
            .prop("background", "none")
            .prop("border", "none")
            .prop("padding", "0")
            .prop("cursor", "pointer")
            .prop("color", &contract.var("textStrong")?),
    );
    sheet.global(
        "a",
        StyleProps::new()
            .prop("text-decoration", "none")
            .prop("color", &contract.var("link")?),
    );
    sheet.global(
        "ul",
        StyleProps::new()
            .prop("margin", "0")
            .prop("padding-left", "1.75rem"),
    );
    Ok(())
}

pub fn register_helpers(
    sheet: &mut Stylesheet,
    contract: &ThemeContract,
) -> Result<Helpers, DefinitionError> {
    let visually_hide = sheet.style(
        "visually-hide",
        vec![Part::Props(
            StyleProps::new()
                .prop("border", "0")
                .prop("clip", "rect(1px, 1px, 1px, 1px)")
                .prop("height", "1px")
                .prop("margin", "-1px")
                .prop("overflow", "hidden")
                .prop("padding", "0")
                .prop("position", "absolute")
                .prop("width", "1px"),
        )],
    );

    let min_full_height = sheet.style(
        "min-full-height",
        vec![Part::Props(StyleProps::new().prop("min-height", "100vh"))],
    );
    // iOS Safari reports 100vh including the collapsed browser chrome.
    sheet.rule(
        CssRule::new("@supports (-webkit-touch-callout: none)").child(
            CssRule::new(".min-full-height").property("min-height", "-webkit-fill-available"),
        ),
    );

    let translucent_surface = sheet.style(
        "translucent-surface",
        vec![Part::Props(
            StyleProps::new()
                .prop("background-color", &contract.var("surfaceTranslucent")?)
                .prop("backdrop-filter", "blur(8px)")
                .prop("-webkit-backdrop-filter", "blur(8px)"),
        )],
    );

    // Clears the fixed header; tracks its responsive height.
    let padding_for_header = sheet.style(
        "padding-for-header",
        vec![Part::Merged(responsive_style(
            BreakpointRules::new()
                .mobile(StyleProps::new().prop("padding-top", "72px"))
                .tablet(StyleProps::new().prop("padding-top", "112px")),
        ))],
    );

    Ok(Helpers {
        visually_hide,
        min_full_height,
        translucent_surface,
        padding_for_header,
    })
}
