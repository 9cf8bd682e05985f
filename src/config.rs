//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a timemask.toml, and if present we load settings from there.
//! This provides the format template and the hour format. Command line flags override both.

use crate::modifier::HourFormat;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE: &str = "timemask.toml";

/// Format used when nothing else is configured.
pub const DEFAULT_FORMAT: &str = "hh:mm:ss";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from timemask.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_FORMAT.to_string())]
    /// Format template split into editable sections.
    pub format: String,
    #[facet(default = "12".to_string())]
    /// Hour bound, `"12"` or `"24"`.
    pub hour_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            hour_format: HourFormat::default().to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from timemask.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        };
        if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
            return config;
        }
        warn!(path = %path.display(), "config file could not be parsed, using defaults");
        Self::default()
    }

    #[must_use]
    /// The configured hour bound, falling back to 12 for unrecognised values.
    pub fn hour_format(&self) -> HourFormat {
        self.hour_format.parse().unwrap_or_else(|err| {
            warn!(%err, "invalid hour_format in config");
            HourFormat::default()
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
