use anyhow::Result;
use std::path::Path;
use weft::config::SiteConfig;
use weft::site::Site;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let config = SiteConfig::load_or_default("Site.toml")?;
    let site = Site::new(config)?;
    site.write(Path::new("dist"))?;

    tracing::info!("site built");
    Ok(())
}
