use loom::styling::responsive::{
    Breakpoint, BreakpointRules, DARK_SCHEME_QUERY, DESKTOP_QUERY, StyleProps, TABLET_QUERY,
    dark_mode_style, responsive_style,
};

#[test]
fn test_breakpoint_predicates() {
    assert_eq!(Breakpoint::Mobile.media_query(), None);
    assert_eq!(Breakpoint::Tablet.media_query(), Some(TABLET_QUERY));
    assert_eq!(Breakpoint::Desktop.media_query(), Some(DESKTOP_QUERY));
    assert!(Breakpoint::Mobile < Breakpoint::Tablet);
    assert!(Breakpoint::Tablet < Breakpoint::Desktop);
}

#[test]
fn test_mobile_only_resolves_to_root_rule() {
    let merged = responsive_style(
        BreakpointRules::new().mobile(StyleProps::new().prop("display", "flex")),
    );
    let props: Vec<(&str, &str)> = merged.base().iter().collect();
    assert_eq!(props, vec![("display", "flex")]);
    assert!(merged.media().is_empty());
}

#[test]
fn test_tiers_kept_in_narrow_to_wide_order() {
    let merged = responsive_style(
        BreakpointRules::new()
            .desktop(StyleProps::new().prop("flex", "unset"))
            .tablet(StyleProps::new().prop("align-items", "unset"))
            .mobile(StyleProps::new().prop("display", "flex")),
    );
    let queries: Vec<&str> = merged.media().iter().map(|(q, _)| q.as_str()).collect();
    assert_eq!(queries, vec![TABLET_QUERY, DESKTOP_QUERY]);
}

#[test]
fn test_absent_mobile_yields_empty_base() {
    let merged = responsive_style(
        BreakpointRules::new().tablet(StyleProps::new().prop("gap", "32px")),
    );
    assert!(merged.base().is_empty());
    assert_eq!(merged.media().len(), 1);
}

#[test]
fn test_empty_tier_rule_is_a_noop_not_an_error() {
    let merged = responsive_style(BreakpointRules::new().tablet(StyleProps::new()));
    assert_eq!(merged.media().len(), 1);
    let (base, media) = merged.rules(".logo");
    assert!(base.is_none());
    assert_eq!(media.len(), 1);
    let rendered = media[0].render();
    assert!(rendered.starts_with(&format!("@media {} {{", TABLET_QUERY)));
    assert!(rendered.contains(".logo {"));
}

#[test]
fn test_rules_lowering() {
    let merged = responsive_style(
        BreakpointRules::new()
            .mobile(StyleProps::new().prop("height", "1.5rem"))
            .tablet(StyleProps::new().prop("height", "2rem")),
    );
    let (base, media) = merged.rules(".logo");
    let base = base.unwrap();
    assert!(base.render().contains("height: 1.5rem;"));
    assert!(media[0].render().contains("height: 2rem;"));
}

#[test]
fn test_dark_mode_is_an_independent_axis() {
    let merged = dark_mode_style(StyleProps::new().prop("color-scheme", "dark"));
    assert!(merged.base().is_empty());
    assert_eq!(merged.media().len(), 1);
    assert_eq!(merged.media()[0].0, DARK_SCHEME_QUERY);
}
