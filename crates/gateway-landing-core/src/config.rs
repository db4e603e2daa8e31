//! Site configuration
//!
//! Loaded once from the `site.toml` embedded in the website build. Every
//! field has a default, so a partial file only overrides what it names.
//!
//! ```toml
//! fallback_server_address = "https://api.example.com"
//! carousel_interval_ms = 3000
//! status_clear_ms = 1800
//! narrow_breakpoint = 768
//! log_level = "info"
//!
//! [links]
//! docs = "https://github.com/QuantumNous/new-api#documentation"
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::carousel::DEFAULT_ENDPOINTS;
use crate::environment::FALLBACK_SERVER_ADDRESS;
use crate::error::{Error, Result};
use crate::viewport::DEFAULT_NARROW_BREAKPOINT;

/// Default carousel period
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 3000;

/// Default lifetime of the copy status message
pub const DEFAULT_STATUS_CLEAR_MS: u64 = 1800;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub fallback_server_address: String,
    pub endpoints: Vec<String>,
    pub carousel_interval_ms: u64,
    pub status_clear_ms: u64,
    pub narrow_breakpoint: u32,
    pub links: Links,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            fallback_server_address: FALLBACK_SERVER_ADDRESS.to_string(),
            endpoints: DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            status_clear_ms: DEFAULT_STATUS_CLEAR_MS,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            links: Links::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Outbound navigation targets
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Links {
    pub docs: String,
    pub get_started: String,
    pub source: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            docs: "https://github.com/QuantumNous/new-api#documentation".to_string(),
            get_started: "https://github.com/QuantumNous/new-api/releases/latest".to_string(),
            source: "https://github.com/QuantumNous/new-api".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoints.is_empty() {
            return Err(Error::config_invalid("endpoints must not be empty"));
        }
        if let Some(bad) = self.endpoints.iter().find(|e| !e.starts_with('/')) {
            return Err(Error::config_invalid(format!(
                "endpoint '{bad}' must start with '/'"
            )));
        }
        if self.carousel_interval_ms == 0 {
            return Err(Error::config_invalid("carousel_interval_ms must be positive"));
        }
        if self.status_clear_ms == 0 {
            return Err(Error::config_invalid("status_clear_ms must be positive"));
        }
        if self.narrow_breakpoint == 0 {
            return Err(Error::config_invalid("narrow_breakpoint must be positive"));
        }
        if self.fallback_server_address.trim().is_empty() {
            return Err(Error::config_invalid("fallback_server_address must not be empty"));
        }
        for (name, url) in [
            ("docs", &self.links.docs),
            ("get_started", &self.links.get_started),
            ("source", &self.links.source),
        ] {
            if url.trim().is_empty() {
                return Err(Error::config_invalid(format!("links.{name} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn status_clear_delay(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }
}
