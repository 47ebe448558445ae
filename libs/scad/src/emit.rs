//! # OpenSCAD Emission
//!
//! Renders a validated [`SolidNode`] as OpenSCAD source. Each placed child
//! becomes `translate(...) rotate(...) child`, matching the rotate-then-move
//! order of [`Transform`].
//!
//! ## Example Output
//!
//! ```text
//! difference() {
//!   cylinder(h=3, r=11, center=false, $fn=60);
//!   translate([0, 0, 1.5]) cylinder(h=5, r=2.5, center=true, $fn=60);
//! }
//! ```
//!
//! [`Transform`]: dronecad_csg::Transform

use dronecad_csg::analysis::validate_tree;
use dronecad_csg::{BooleanOp, Placed, Solid, SolidNode};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ExportError;

const INDENT: &str = "  ";

/// What the emitted source is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Printable output. Color tags are refused.
    Fabrication,
    /// Viewer output with `color()` blocks.
    Preview,
}

/// Renders `node` as OpenSCAD source for `target`.
///
/// # Errors
///
/// - [`ExportError::Malformed`] when the tree has an empty composite, a bad
///   dimension or segment count, or a non-finite transform
/// - [`ExportError::ProxyNotFabricable`] when a tree with color tags is sent
///   to [`Target::Fabrication`]
pub fn emit(node: &SolidNode, target: Target) -> Result<String, ExportError> {
    debug!(?target, nodes = node.node_count(), "emitting openscad");

    validate_tree(node)?;
    if target == Target::Fabrication {
        let tags = node.color_tags();
        if !tags.is_empty() {
            return Err(ExportError::ProxyNotFabricable {
                tags: tags.iter().map(|t| t.name.clone()).collect(),
            });
        }
    }

    let mut out = String::new();
    print_node(node, 0, &mut out);
    Ok(out)
}

/// [`emit`] for a finished solid.
pub fn emit_solid(solid: &Solid, target: Target) -> Result<String, ExportError> {
    emit(&solid.root, target)
}

fn print_node(node: &SolidNode, depth: usize, out: &mut String) {
    match node {
        SolidNode::Cylinder {
            height,
            radius,
            center,
            segments,
        } => {
            out.push_str(&format!(
                "cylinder(h={}, r={}, center={}, $fn={});\n",
                height, radius, center, segments
            ));
        }
        SolidNode::Cube { size, center } => {
            out.push_str(&format!(
                "cube({}, center={});\n",
                print_vector([size.x, size.y, size.z]),
                center
            ));
        }
        SolidNode::Union { children } => print_block(BooleanOp::Union, children, depth, out),
        SolidNode::Difference { children } => {
            print_block(BooleanOp::Difference, children, depth, out)
        }
        SolidNode::Hull { children } => print_block(BooleanOp::Hull, children, depth, out),
        SolidNode::Color { tag, child } => {
            let [r, g, b, a] = tag.rgba;
            out.push_str(&format!("color([{}, {}, {}, {}]) ", r, g, b, a));
            print_node(child, depth, out);
        }
    }
}

fn print_block(op: BooleanOp, children: &[Placed], depth: usize, out: &mut String) {
    out.push_str(&format!("{}() {{\n", op.name()));
    for child in children {
        print_placed(child, depth + 1, out);
    }
    out.push_str(&INDENT.repeat(depth));
    out.push_str("}\n");
}

fn print_placed(placed: &Placed, depth: usize, out: &mut String) {
    out.push_str(&INDENT.repeat(depth));
    let t = &placed.transform;
    if t.translation != DVec3::ZERO {
        out.push_str(&format!(
            "translate({}) ",
            print_vector(t.translation.to_array())
        ));
    }
    if t.has_rotation() {
        out.push_str(&format!("rotate({}) ", print_vector(t.rotation.to_array())));
    }
    print_node(&placed.node, depth, out);
}

fn print_vector(v: [f64; 3]) -> String {
    format!("[{}, {}, {}]", v[0], v[1], v[2])
}

#[cfg(test)]
mod tests;
