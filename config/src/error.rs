//! # Configuration Errors

use thiserror::Error;

use crate::constants::{MAX_SEGMENTS, MIN_SEGMENTS};

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A segment count too small to form a polygon or too large to mesh.
    #[error("{field} must be {}..={} segments: {value}", MIN_SEGMENTS, MAX_SEGMENTS)]
    InvalidSegments { field: &'static str, value: u32 },

    /// A length, radius or ratio that must be positive and finite.
    #[error("{field} must be positive and finite: {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A value that may be negative but must be finite.
    #[error("{field} must be finite: {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Overrides could not be parsed.
    #[error("invalid configuration document: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Rejects zero, negative and non-finite values.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Rejects NaN and infinities.
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}
