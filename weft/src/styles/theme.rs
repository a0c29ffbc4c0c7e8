use loom::styling::error::DefinitionError;
use loom::styling::theme::{Palette, ThemeContract, ThemeVariant};

/// The site's color system: one contract, two realized variants. The light
/// palette is the reference; the dark variant must cover exactly the same
/// role set or definition fails.
pub struct SiteTheme {
    pub contract: ThemeContract,
    pub light: ThemeVariant,
    pub dark: ThemeVariant,
}

pub fn site_theme() -> Result<SiteTheme, DefinitionError> {
    let (contract, light) = ThemeContract::define("light", light_palette())?;
    let dark = contract.variant("dark", dark_palette())?;
    Ok(SiteTheme {
        contract,
        light,
        dark,
    })
}

fn light_palette() -> Palette {
    Palette::new()
        .role("surface", "hsl(0, 0%, 100%)")
        .role("surfaceTranslucent", "hsla(0, 0%, 100%, 0.6)")
        .role("surface2", "hsl(0, 0%, 97%)")
        .role("surface3", "hsl(0, 0%, 94%)")
        .role("textStrong", "hsl(0, 0%, 5%)")
        .role("text", "hsl(0, 0%, 32%)")
        .role("textSubdued", "hsl(0, 0%, 42%)")
        .role("textFaint", "hsl(0, 0%, 54%)")
        .role("border", "hsl(0, 0%, 74%)")
        .role("link", "hsl(225, 85%, 55%)")
        .role("promptPath", "hsl(202, 88%, 42%)")
        .role("promptCommand", "hsl(144, 88%, 32%)")
}

fn dark_palette() -> Palette {
    Palette::new()
        .role("surface", "hsl(0, 0%, 0%)")
        .role("surfaceTranslucent", "hsla(0, 0%, 0%, 0.6)")
        .role("surface2", "hsl(0, 0%, 6%)")
        .role("surface3", "hsl(0, 0%, 12%)")
        .role("textStrong", "hsl(0, 0%, 95%)")
        .role("text", "hsl(0, 0%, 64%)")
        .role("textSubdued", "hsl(0, 0%, 48%)")
        .role("textFaint", "hsl(0, 0%, 40%)")
        .role("border", "hsl(0, 0%, 25%)")
        .role("link", "hsl(225, 95%, 75%)")
        .role("promptPath", "hsl(202, 78%, 64%)")
        .role("promptCommand", "hsl(144, 78%, 44%)")
}
