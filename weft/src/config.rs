use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Build-time site configuration: the canonical origin used for absolute
/// URLs, the default theme variant, and the color table for rendered code
/// blocks. Everything has a default so the site builds without a config file.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_theme")]
    pub default_theme: String,
    #[serde(default)]
    pub code_colors: CodeColors,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            default_theme: default_theme(),
            code_colors: CodeColors::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads the config when the file exists, falling back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Colors for fenced code blocks in blog posts, defaulting to a Tokyo
/// Night-style palette.
#[derive(Clone, Debug, Deserialize)]
pub struct CodeColors {
    #[serde(default = "default_code_background")]
    pub background: String,
    #[serde(default = "default_code_text")]
    pub text: String,
}

impl Default for CodeColors {
    fn default() -> Self {
        Self {
            background: default_code_background(),
            text: default_code_text(),
        }
    }
}

fn default_origin() -> String {
    "https://example.dev".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_code_background() -> String {
    "#1a1b26".to_string()
}

fn default_code_text() -> String {
    "#a9b1d6".to_string()
}
