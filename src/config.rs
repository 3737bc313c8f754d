//! Engine configuration.
//!
//! Collects every tolerance knob in one YAML-loadable structure. Missing keys
//! fall back to defaults, so an empty document is a valid configuration.
//!
//! ```yaml
//! raster:
//!   step_major_axis: false
//! clip:
//!   rect:
//!     max_depth: 10
//!     tolerance: 0.5
//!   polygon:
//!     max_depth: 12
//!     min_length_sq: 1.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clip::ClipConfig;
use crate::error::{Error, Result};
use crate::raster::RasterOptions;

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rasterizer options.
    #[serde(default)]
    pub raster: RasterOptions,

    /// Clipper tolerances.
    #[serde(default)]
    pub clip: ClipConfig,
}

impl EngineConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::debug!("using default config: {e}");
                Self::default()
            }
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self)
            .map_err(|e| Error::ConfigParse { line: 0, message: e.to_string() })
    }

    /// Check every tolerance is usable.
    pub fn validate(&self) -> Result<()> {
        self.clip.validate()
    }
}
