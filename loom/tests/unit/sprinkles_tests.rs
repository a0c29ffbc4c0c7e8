use loom::styling::error::DefinitionError;
use loom::styling::responsive::TABLET_QUERY;
use loom::styling::scale::Scale;
use loom::styling::sprinkles::{Schema, one, span2, span3};
use loom::styling::theme::{Palette, ThemeContract};

fn font_sizes() -> Scale {
    Scale::define("fontSizes", &[("16", "1rem"), ("18", "1.125rem"), ("20", "1.25rem")]).unwrap()
}

fn spaces() -> Scale {
    Scale::define("spaces", &[("8", "8px"), ("16", "16px"), ("24", "24px")]).unwrap()
}

fn schema() -> Schema {
    Schema::builder()
        .responsive_values("display", &["none", "block", "flex"])
        .responsive_scale("fontSize", &font_sizes())
        .responsive_scale("paddingLeft", &spaces())
        .responsive_scale("paddingRight", &spaces())
        .fixed_values("fontStyle", &["normal", "italic"])
        .shorthand("px", &["paddingLeft", "paddingRight"])
        .build()
        .unwrap()
}

#[test]
fn test_scalar_selects_the_default_tier_class() {
    let classes = schema().apply(&[("display", one("flex"))]).unwrap();
    assert_eq!(classes, vec!["display-flex"]);
}

#[test]
fn test_font_size_span_gates_tablet_value() {
    let schema = schema();
    let classes = schema.apply(&[("fontSize", span2("16", "18"))]).unwrap();
    assert_eq!(classes, vec!["font-size-16", "font-size-18-tablet"]);

    // The unconditional class carries 1rem; the tablet class is only emitted
    // inside the min-width: 768px block with 1.125rem.
    let (base, media) = schema.rules();
    let base_css: String = base.iter().map(|rule| rule.render()).collect();
    assert!(base_css.contains(".font-size-16 {\n    font-size: 1rem;\n}"));
    assert!(!base_css.contains("font-size-18-tablet"));

    assert_eq!(media[0].query(), TABLET_QUERY);
    let tablet_css = media[0].render();
    assert!(tablet_css.contains(".font-size-18-tablet {"));
    assert!(tablet_css.contains("font-size: 1.125rem;"));
}

#[test]
fn test_two_element_span_omits_desktop_class() {
    let classes = schema().apply(&[("fontSize", span2("16", "18"))]).unwrap();
    assert!(classes.iter().all(|class| !class.ends_with("-desktop")));
}

#[test]
fn test_three_element_span() {
    let classes = schema()
        .apply(&[("fontSize", span3("16", "18", "20"))])
        .unwrap();
    assert_eq!(
        classes,
        vec!["font-size-16", "font-size-18-tablet", "font-size-20-desktop"]
    );
}

#[test]
fn test_apply_is_deterministic() {
    let schema = schema();
    let config = [
        ("display", one("flex")),
        ("px", one("16")),
        ("fontSize", span2("16", "18")),
    ];
    let first = schema.apply(&config).unwrap();
    let second = schema.apply(&config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_shorthand_expands_in_declared_order() {
    let classes = schema().apply(&[("px", one("16"))]).unwrap();
    assert_eq!(classes, vec!["padding-left-16", "padding-right-16"]);
}

#[test]
fn test_shorthand_accepts_spans() {
    let classes = schema().apply(&[("px", span2("8", "24"))]).unwrap();
    assert_eq!(
        classes,
        vec![
            "padding-left-8",
            "padding-left-24-tablet",
            "padding-right-8",
            "padding-right-24-tablet",
        ]
    );
}

#[test]
fn test_unknown_property_rejected() {
    assert_eq!(
        schema().apply(&[("lineHeight", one("1"))]).unwrap_err(),
        DefinitionError::UnknownProperty {
            property: "lineHeight".to_string(),
        }
    );
}

#[test]
fn test_unknown_value_rejected() {
    assert_eq!(
        schema().apply(&[("fontSize", one("17"))]).unwrap_err(),
        DefinitionError::UnknownValue {
            property: "fontSize".to_string(),
            value: "17".to_string(),
        }
    );
}

#[test]
fn test_span_on_fixed_property_rejected() {
    assert_eq!(
        schema()
            .apply(&[("fontStyle", span2("normal", "italic"))])
            .unwrap_err(),
        DefinitionError::NotResponsive {
            property: "fontStyle".to_string(),
        }
    );
}

#[test]
fn test_fixed_property_has_no_tier_classes() {
    let (_, media) = schema().rules();
    for block in &media {
        assert!(!block.render().contains("font-style-"));
    }
}

#[test]
fn test_empty_value_set_rejected_at_build() {
    let result = Schema::builder().responsive_values("display", &[]).build();
    assert_eq!(
        result.unwrap_err(),
        DefinitionError::EmptyValueSet {
            property: "display".to_string(),
        }
    );
}

#[test]
fn test_shorthand_referencing_undefined_property_rejected_at_build() {
    let result = Schema::builder()
        .responsive_scale("paddingLeft", &spaces())
        .shorthand("px", &["paddingLeft", "paddingRight"])
        .build();
    assert_eq!(
        result.unwrap_err(),
        DefinitionError::UnknownShorthandTarget {
            shorthand: "px".to_string(),
            property: "paddingRight".to_string(),
        }
    );
}

#[test]
fn test_duplicate_schema_entry_rejected_at_build() {
    let result = Schema::builder()
        .responsive_values("display", &["flex"])
        .responsive_values("display", &["block"])
        .build();
    assert_eq!(
        result.unwrap_err(),
        DefinitionError::DuplicateSchemaEntry {
            name: "display".to_string(),
        }
    );
}

#[test]
fn test_color_values_resolve_through_theme_vars() {
    let (contract, _) = ThemeContract::define(
        "light",
        Palette::new()
            .role("text", "hsl(0, 0%, 32%)")
            .role("textStrong", "hsl(0, 0%, 5%)"),
    )
    .unwrap();
    let schema = Schema::builder()
        .responsive_vars("color", &contract)
        .build()
        .unwrap();

    let classes = schema.apply(&[("color", one("textStrong"))]).unwrap();
    assert_eq!(classes, vec!["color-text-strong"]);

    let (base, _) = schema.rules();
    let css: String = base.iter().map(|rule| rule.render()).collect();
    assert!(css.contains("color: var(--loom-text-strong);"));
}
