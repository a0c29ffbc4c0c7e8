use std::fs;
use std::path::Path;
use tempfile::tempdir;
use weft::config::SiteConfig;
use weft::site::Site;

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

#[test]
fn test_write_emits_every_artifact() {
    let dir = tempdir().unwrap();
    let site = Site::new(SiteConfig::default()).unwrap();
    site.write(dir.path()).unwrap();

    for artifact in [
        "assets/css/style.css",
        "assets/js/theme.js",
        "index.html",
        "about/index.html",
        "experience/index.html",
        "education/index.html",
        "blog/index.html",
        "blog/design-tokens-that-scale/index.html",
        "blog/two-axes-of-dark-mode/index.html",
        "contact/index.html",
        "sitemap.xml",
    ] {
        assert!(dir.path().join(artifact).exists(), "missing {artifact}");
    }
}

#[test]
fn test_pages_link_site_assets() {
    let dir = tempdir().unwrap();
    let site = Site::new(SiteConfig::default()).unwrap();
    site.write(dir.path()).unwrap();

    let home = read(dir.path(), "index.html");
    assert!(home.starts_with("<!DOCTYPE html>"));
    assert!(home.contains("/assets/css/style.css"));
    assert!(home.contains("/assets/js/theme.js"));
    assert!(home.contains("id=\"theme-toggle\""));
}

#[test]
fn test_theme_script_lists_variants() {
    let dir = tempdir().unwrap();
    let site = Site::new(SiteConfig::default()).unwrap();
    site.write(dir.path()).unwrap();

    let script = read(dir.path(), "assets/js/theme.js");
    assert!(script.contains("\"theme-light\", \"theme-dark\""));
    assert!(script.contains("DEFAULT_THEME = \"theme-light\""));
}

#[test]
fn test_dark_default_theme() {
    let dir = tempdir().unwrap();
    let mut config = SiteConfig::default();
    config.default_theme = "dark".to_string();
    let site = Site::new(config).unwrap();
    site.write(dir.path()).unwrap();

    let script = read(dir.path(), "assets/js/theme.js");
    assert!(script.contains("DEFAULT_THEME = \"theme-dark\""));
}

#[test]
fn test_toggle_reflects_default_scheme() {
    let dir = tempdir().unwrap();
    let mut config = SiteConfig::default();
    config.default_theme = "dark".to_string();
    let site = Site::new(config).unwrap();
    site.write(dir.path()).unwrap();

    let home = read(dir.path(), "index.html");
    assert!(home.contains("data-color-scheme=\"dark\""));
}

#[test]
fn test_toggle_label_is_visually_hidden() {
    let dir = tempdir().unwrap();
    let site = Site::new(SiteConfig::default()).unwrap();
    site.write(dir.path()).unwrap();

    let home = read(dir.path(), "index.html");
    assert!(home.contains("visually-hide"));
    assert!(home.contains("Toggle color theme"));
}

#[test]
fn test_unknown_default_theme_is_an_error() {
    let mut config = SiteConfig::default();
    config.default_theme = "sepia".to_string();
    assert!(Site::new(config).is_err());
}

#[test]
fn test_sitemap_lists_every_page() {
    let dir = tempdir().unwrap();
    let mut config = SiteConfig::default();
    config.origin = "https://devonreed.dev".to_string();
    let site = Site::new(config).unwrap();
    site.write(dir.path()).unwrap();

    let sitemap = read(dir.path(), "sitemap.xml");
    assert!(sitemap.contains("<loc>https://devonreed.dev/</loc>"));
    assert!(sitemap.contains("<loc>https://devonreed.dev/blog/two-axes-of-dark-mode/</loc>"));
    assert!(sitemap.contains("<loc>https://devonreed.dev/contact/</loc>"));
}

#[test]
fn test_post_page_contains_body_and_date() {
    let dir = tempdir().unwrap();
    let site = Site::new(SiteConfig::default()).unwrap();
    site.write(dir.path()).unwrap();

    let post = read(dir.path(), "blog/two-axes-of-dark-mode/index.html");
    assert!(post.contains("The two axes of dark mode"));
    assert!(post.contains("January 5, 2024"));
    assert!(post.contains("prefers-color-scheme"));
}
