//! Error types for folded-dipole-dxf.
//!
//! [`Error`] is what a single run can fail with once arguments are parsed:
//! a bad configuration file, parameters refused in strict mode, or a failed
//! write of the result.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use crate::dipole::error::{DipoleError, DipoleResult};

/// Result type for a run of the tool.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Strict mode refused the parameters.
    #[error(transparent)]
    Dipole(#[from] DipoleError),

    /// The dimension set could not be encoded as JSON.
    #[error("failed to encode dimensions: {0}")]
    Encode(#[from] serde_json::Error),

    /// The result could not be written to stdout.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested file does not exist.
    #[error("configuration file not found: {path}")]
    Missing {
        /// Requested path.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("cannot read configuration file {path}: {source}")]
    Unreadable {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON or has unknown fields.
    #[error("malformed configuration file {path}: {source}")]
    Malformed {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A field holds a value the tool cannot use.
    #[error("invalid `{field}` in configuration: {message}")]
    InvalidField {
        /// Dotted field name, e.g. `drawing.mount_offset`.
        field: &'static str,
        /// What is wrong with the value.
        message: String,
    },
}
