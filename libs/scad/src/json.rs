//! # JSON Trees
//!
//! Serialized trees for consumers that cannot link against the Rust types.
//! Nodes are internally tagged with `"kind"`:
//!
//! ```json
//! { "kind": "cylinder", "height": 5.0, "radius": 2.0, "center": false, "segments": 20 }
//! ```

use dronecad_csg::analysis::validate_tree;
use dronecad_csg::SolidNode;

use crate::error::ExportError;

/// Pretty-printed JSON for a tree.
pub fn to_json(node: &SolidNode) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Reads a tree and checks it is well formed before handing it back.
///
/// # Example
///
/// ```rust
/// use dronecad_scad::{from_json, ExportError};
///
/// let post = from_json(r#"{ "kind": "cylinder", "height": 5.0, "radius": 2.0, "center": false, "segments": 20 }"#);
/// assert!(post.is_ok());
///
/// let flat = from_json(r#"{ "kind": "cube", "size": [1.0, 0.0, 1.0], "center": true }"#);
/// assert!(matches!(flat, Err(ExportError::Malformed(_))));
/// ```
pub fn from_json(source: &str) -> Result<SolidNode, ExportError> {
    let node: SolidNode = serde_json::from_str(source)?;
    validate_tree(&node)?;
    Ok(node)
}

#[cfg(test)]
mod tests {
    use dronecad_csg::boolean::difference;
    use dronecad_csg::primitives::{cube, cylinder};
    use dronecad_csg::ColorTag;

    use super::*;

    #[test]
    fn test_tree_survives_json() {
        let plate = cube([30.0, 30.0, 1.6], true).unwrap();
        let hole = cylinder(5.0, 1.6, true, 20).unwrap();
        let board = difference(plate, [hole.at(12.75, 12.75, 0.0)])
            .unwrap()
            .colored(ColorTag::new("pcb", [0.1, 0.45, 0.2, 1.0]));

        let json = to_json(&board.root).unwrap();
        assert!(json.contains("\"kind\": \"difference\""));
        assert_eq!(from_json(&json).unwrap(), board.root);
    }

    #[test]
    fn test_unknown_kind_is_json_error() {
        let err = from_json(r#"{ "kind": "sphere", "radius": 1.0 }"#).unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
    }

    #[test]
    fn test_empty_union_is_malformed() {
        let err = from_json(r#"{ "kind": "union", "children": [] }"#).unwrap_err();
        assert!(matches!(err, ExportError::Malformed(_)));
    }
}
