use loom::styling::error::DefinitionError;
use loom::styling::theme::{Palette, ThemeContract};

fn reference_palette() -> Palette {
    Palette::new()
        .role("surface", "hsl(0, 0%, 100%)")
        .role("textStrong", "hsl(0, 0%, 5%)")
        .role("link", "hsl(225, 85%, 55%)")
}

#[test]
fn test_reference_theme_realizes_variant() {
    let (contract, light) = ThemeContract::define("light", reference_palette()).unwrap();
    assert_eq!(light.class_name(), "theme-light");
    let roles: Vec<&str> = contract.roles().collect();
    assert_eq!(roles, vec!["surface", "textStrong", "link"]);

    let css = light.rule().render();
    assert!(css.starts_with(".theme-light {"));
    assert!(css.contains("--loom-surface: hsl(0, 0%, 100%);"));
    assert!(css.contains("--loom-text-strong: hsl(0, 0%, 5%);"));
}

#[test]
fn test_variant_with_full_role_set() {
    let (contract, _) = ThemeContract::define("light", reference_palette()).unwrap();
    let dark = contract
        .variant(
            "dark",
            Palette::new()
                .role("surface", "hsl(0, 0%, 0%)")
                .role("textStrong", "hsl(0, 0%, 95%)")
                .role("link", "hsl(225, 95%, 75%)"),
        )
        .unwrap();
    assert_eq!(dark.class_name(), "theme-dark");
    assert!(dark.rule().render().contains("--loom-link: hsl(225, 95%, 75%);"));
}

#[test]
fn test_variant_missing_role_names_the_role() {
    let (contract, _) = ThemeContract::define("light", reference_palette()).unwrap();
    let result = contract.variant(
        "dark",
        Palette::new()
            .role("surface", "hsl(0, 0%, 0%)")
            .role("textStrong", "hsl(0, 0%, 95%)"),
    );
    assert_eq!(
        result.unwrap_err(),
        DefinitionError::MissingRole {
            variant: "dark".to_string(),
            role: "link".to_string(),
        }
    );
}

#[test]
fn test_variant_extra_role_rejected() {
    let (contract, _) = ThemeContract::define("light", reference_palette()).unwrap();
    let result = contract.variant(
        "dark",
        Palette::new()
            .role("surface", "hsl(0, 0%, 0%)")
            .role("textStrong", "hsl(0, 0%, 95%)")
            .role("link", "hsl(225, 95%, 75%)")
            .role("accent", "hsl(144, 88%, 32%)"),
    );
    assert_eq!(
        result.unwrap_err(),
        DefinitionError::UnknownRole {
            variant: "dark".to_string(),
            role: "accent".to_string(),
        }
    );
}

#[test]
fn test_duplicate_role_rejected() {
    let result = ThemeContract::define(
        "light",
        Palette::new()
            .role("surface", "hsl(0, 0%, 100%)")
            .role("surface", "hsl(0, 0%, 97%)"),
    );
    assert_eq!(
        result.unwrap_err(),
        DefinitionError::DuplicateRole {
            theme: "light".to_string(),
            role: "surface".to_string(),
        }
    );
}

#[test]
fn test_symbolic_reference() {
    let (contract, _) = ThemeContract::define("light", reference_palette()).unwrap();
    assert_eq!(contract.var("textStrong").unwrap(), "var(--loom-text-strong)");
    assert_eq!(
        contract.var("accent"),
        Err(DefinitionError::UnknownContractRole {
            role: "accent".to_string(),
        })
    );
}
