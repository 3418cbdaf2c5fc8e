//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::dipole::DEFAULT_MOUNT_OFFSET;
use crate::error::ConfigError;

/// Log levels accepted in `logging.level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Drawing settings.
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drawing.mount_offset.is_finite() {
            return Err(ConfigError::InvalidField {
                field: "drawing.mount_offset",
                message: format!(
                    "must be a finite number of mm, got {}",
                    self.drawing.mount_offset
                ),
            });
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidField {
                field: "logging.level",
                message: format!(
                    "'{}' is not one of: {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

/// Drawing configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawingConfig {
    /// Mounting offset in mm, used when none is given on the command line.
    #[serde(default = "default_mount_offset")]
    pub mount_offset: f64,

    /// Reject parameters that produce degenerate geometry.
    #[serde(default)]
    pub strict: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            mount_offset: default_mount_offset(),
            strict: false,
        }
    }
}

const fn default_mount_offset() -> f64 {
    DEFAULT_MOUNT_OFFSET
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
