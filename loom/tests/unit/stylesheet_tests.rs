use loom::styling::css::CssRule;
use loom::styling::responsive::{BreakpointRules, StyleProps, TABLET_QUERY, responsive_style};
use loom::styling::scale::Scale;
use loom::styling::sprinkles::{Schema, one};
use loom::styling::stylesheet::{Part, Stylesheet};
use loom::styling::theme::{Palette, ThemeContract};

fn schema() -> Schema {
    let spaces = Scale::define("spaces", &[("8", "8px"), ("16", "16px")]).unwrap();
    Schema::builder()
        .responsive_values("display", &["flex", "block"])
        .responsive_scale("gap", &spaces)
        .build()
        .unwrap()
}

#[test]
fn test_composition_concatenates_in_author_order() {
    let schema = schema();
    let mut sheet = Stylesheet::new();
    let classes = sheet.style(
        "role-container",
        vec![
            Part::Classes(schema.apply(&[("display", one("flex")), ("gap", one("8"))]).unwrap()),
            Part::Props(StyleProps::new().prop("flex", "1")),
        ],
    );
    assert_eq!(classes, "display-flex gap-8 role-container");
    assert!(sheet.render().contains(".role-container {\n    flex: 1;\n}"));
}

#[test]
fn test_duplicate_class_references_not_deduplicated() {
    let schema = schema();
    let mut sheet = Stylesheet::new();
    let flex = schema.apply(&[("display", one("flex"))]).unwrap();
    let classes = sheet.style(
        "twice",
        vec![Part::Classes(flex.clone()), Part::Classes(flex)],
    );
    assert_eq!(classes, "display-flex display-flex");
}

#[test]
fn test_local_class_appears_once_across_parts() {
    let mut sheet = Stylesheet::new();
    let classes = sheet.style(
        "header",
        vec![
            Part::Props(StyleProps::new().prop("position", "fixed")),
            Part::Merged(responsive_style(
                BreakpointRules::new().tablet(StyleProps::new().prop("height", "2rem")),
            )),
        ],
    );
    assert_eq!(classes, "header");
    let css = sheet.render();
    assert!(css.contains(".header {\n    position: fixed;\n}"));
    assert!(css.contains(&format!("@media {} {{", TABLET_QUERY)));
}

#[test]
fn test_nested_part_emits_child_rule() {
    let mut sheet = Stylesheet::new();
    let classes = sheet.style(
        "sun-icon",
        vec![Part::Nested(
            CssRule::new("button[data-color-scheme='dark'] > &").property("opacity", "0"),
        )],
    );
    assert_eq!(classes, "sun-icon");
    let css = sheet.render();
    assert!(css.contains(".sun-icon {"));
    assert!(css.contains("button[data-color-scheme='dark'] > & {"));
}

#[test]
fn test_render_preserves_registration_order() {
    let mut sheet = Stylesheet::new();
    sheet.global("body", StyleProps::new().prop("margin", "0"));
    sheet.include_schema(&schema());
    sheet.style("late", vec![Part::Props(StyleProps::new().prop("flex", "1"))]);

    let css = sheet.render();
    let body = css.find("body {").unwrap();
    let atomic = css.find(".display-flex {").unwrap();
    let late = css.find(".late {").unwrap();
    assert!(body < atomic);
    assert!(atomic < late);
}

#[test]
fn test_keyframes_returns_animation_name() {
    let mut sheet = Stylesheet::new();
    let name = sheet.keyframes(
        "fade-in",
        &[
            ("0%", StyleProps::new().prop("opacity", "0")),
            ("100%", StyleProps::new().prop("opacity", "1")),
        ],
    );
    assert_eq!(name, "fade-in");
    let css = sheet.render();
    assert!(css.contains("@keyframes fade-in {"));
    assert!(css.contains("0% {"));
}

#[test]
fn test_theme_variants_emit_class_scoped_custom_properties() {
    let (contract, light) = ThemeContract::define(
        "light",
        Palette::new().role("surface", "hsl(0, 0%, 100%)"),
    )
    .unwrap();
    let dark = contract
        .variant("dark", Palette::new().role("surface", "hsl(0, 0%, 0%)"))
        .unwrap();

    let mut sheet = Stylesheet::new();
    sheet.theme(&light);
    sheet.theme(&dark);
    let css = sheet.render();
    assert!(css.contains(".theme-light {\n    --loom-surface: hsl(0, 0%, 100%);\n}"));
    assert!(css.contains(".theme-dark {\n    --loom-surface: hsl(0, 0%, 0%);\n}"));
}
