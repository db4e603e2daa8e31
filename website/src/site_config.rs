//! Site configuration embedded from `site.toml`

use gateway_landing_core::{Result, SiteConfig};

const SITE_TOML: &str = include_str!("../site.toml");

/// Parse and validate the embedded configuration
pub fn load() -> Result<SiteConfig> {
    SiteConfig::from_toml_str(SITE_TOML)
}
