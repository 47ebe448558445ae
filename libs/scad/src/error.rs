//! # Export Errors

use dronecad_csg::GeometryError;
use thiserror::Error;

/// Errors raised while exporting a tree.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Proxies are for display only and never reach the fabrication path.
    #[error("tree is a visualization proxy (colors: {}) and cannot be fabricated", .tags.join(", "))]
    ProxyNotFabricable { tags: Vec<String> },

    /// The tree would fail in the mesh compiler.
    #[error("malformed tree: {0}")]
    Malformed(#[from] GeometryError),

    /// JSON (de)serialization failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
