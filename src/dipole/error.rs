//! Error types for dipole parameter checks.

use thiserror::Error;

/// Result type for dipole operations.
pub type DipoleResult<T> = Result<T, DipoleError>;

/// Errors reported by strict parameter validation.
#[derive(Debug, Error)]
pub enum DipoleError {
    /// A parameter would produce degenerate geometry.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Description of what's wrong.
        message: String,
    },
}

impl DipoleError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DipoleError::invalid_parameter("frequency", "must be positive, got -1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'frequency': must be positive, got -1"
        );
    }
}
