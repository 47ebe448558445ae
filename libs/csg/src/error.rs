//! # Geometry Errors
//!
//! Fatal errors raised while building a solid tree. Non-fatal findings are
//! reported as [`crate::Diagnostic`]s instead.

use thiserror::Error;

use crate::boolean::BooleanOp;

/// Errors that can occur while constructing geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A length, radius, box side or segment count out of range.
    #[error("Invalid dimension: {name} = {value} ({reason})")]
    InvalidDimension {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A composition operator called with too few children.
    #[error("{operation} requires at least {required} child(ren), got {actual}")]
    CompositionArity {
        operation: BooleanOp,
        required: usize,
        actual: usize,
    },
}

impl GeometryError {
    /// Creates an invalid dimension error.
    pub fn invalid_dimension(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidDimension {
            name,
            value,
            reason,
        }
    }

    /// Creates a composition arity error.
    pub fn arity(operation: BooleanOp, required: usize, actual: usize) -> Self {
        Self::CompositionArity {
            operation,
            required,
            actual,
        }
    }
}

/// Rejects zero, negative and non-finite lengths.
///
/// # Example
///
/// ```rust
/// use dronecad_csg::error::require_positive;
///
/// assert!(require_positive("radius", 2.5).is_ok());
/// assert!(require_positive("radius", 0.0).is_err());
/// assert!(require_positive("radius", f64::NAN).is_err());
/// ```
pub fn require_positive(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::invalid_dimension(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(GeometryError::invalid_dimension(name, value, "must be > 0"));
    }
    Ok(value)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::invalid_dimension("height", -1.0, "must be > 0");
        assert!(err.to_string().contains("Invalid dimension: height = -1"));

        let err = GeometryError::arity(BooleanOp::Hull, 1, 0);
        assert_eq!(err.to_string(), "hull requires at least 1 child(ren), got 0");
    }

    #[test]
    fn test_require_positive_rejects_infinity() {
        let err = require_positive("width", f64::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::InvalidDimension { name: "width", .. }
        ));
    }
}
