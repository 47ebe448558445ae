//! # Request Errors
//!
//! Part generators return [`GeometryError`] directly. Callers that start from
//! a serialized request can also fail to parse it or to load overrides.

use config::ConfigError;
use dronecad_csg::GeometryError;
use thiserror::Error;

/// Error returned by the JSON request entry points.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request document is not a known part or has bad fields.
    #[error("invalid part request: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration overrides were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The part itself could not be built.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
