use std::fs;
use tempfile::tempdir;
use weft::config::SiteConfig;

#[test]
fn test_default_config() {
    let config = SiteConfig::default();
    assert_eq!(config.origin, "https://example.dev");
    assert_eq!(config.default_theme, "light");
    assert_eq!(config.code_colors.background, "#1a1b26");
    assert_eq!(config.code_colors.text, "#a9b1d6");
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let config = SiteConfig::load_or_default(dir.path().join("Site.toml")).unwrap();
    assert_eq!(config.origin, "https://example.dev");
}

#[test]
fn test_parse_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Site.toml");
    fs::write(
        &path,
        r##"
origin = "https://devonreed.dev"
default_theme = "dark"

[code_colors]
background = "#11111b"
text = "#cdd6f4"
"##,
    )
    .unwrap();

    let config = SiteConfig::from_file(&path).unwrap();
    assert_eq!(config.origin, "https://devonreed.dev");
    assert_eq!(config.default_theme, "dark");
    assert_eq!(config.code_colors.background, "#11111b");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Site.toml");
    fs::write(&path, "origin = \"https://devonreed.dev\"\n").unwrap();

    let config = SiteConfig::from_file(&path).unwrap();
    assert_eq!(config.origin, "https://devonreed.dev");
    assert_eq!(config.default_theme, "light");
    assert_eq!(config.code_colors.background, "#1a1b26");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Site.toml");
    fs::write(&path, "origin = ").unwrap();
    assert!(SiteConfig::from_file(&path).is_err());
}
