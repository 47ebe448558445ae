//! # Solid Tree Types
//!
//! [`SolidNode`] is the value every generator produces: a tree of
//! primitives and boolean composites. Children are owned exclusively by
//! their parent and carry their own [`Transform`], so a node never needs to
//! know where it ends up.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis;
use crate::boolean::BooleanOp;
use crate::diagnostic::Diagnostic;
use crate::transform::Transform;

// =============================================================================
// COLOR TAG
// =============================================================================

/// Viewer material hint. Only visualization proxies carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTag {
    /// Material name, e.g. `"pcb"`.
    pub name: String,
    /// RGBA in [0.0, 1.0].
    pub rgba: [f32; 4],
}

impl ColorTag {
    pub fn new(name: impl Into<String>, rgba: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            rgba,
        }
    }
}

// =============================================================================
// SOLID NODE
// =============================================================================

/// A node in a constructive solid geometry tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolidNode {
    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Cylinder along +Z.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h=3, r=11, center=false, $fn=60);
    /// ```
    Cylinder {
        height: f64,
        radius: f64,
        /// Centered on z=0 instead of resting on it.
        center: bool,
        /// Edges approximating the circle.
        segments: u32,
    },

    /// Axis-aligned box.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube([20, 16, 20], center=true);
    /// ```
    Cube {
        /// Size as [x, y, z].
        size: DVec3,
        /// Centered on the origin instead of sitting in the positive octant.
        center: bool,
    },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    /// Union of children.
    Union { children: Vec<Placed> },

    /// First child minus every other child.
    Difference { children: Vec<Placed> },

    /// Convex hull of children.
    Hull { children: Vec<Placed> },

    // =========================================================================
    // META
    // =========================================================================

    /// Material tag around a proxy subtree.
    Color { tag: ColorTag, child: Box<SolidNode> },
}

impl SolidNode {
    /// Wraps the node with a material tag.
    pub fn colored(self, tag: ColorTag) -> Self {
        Self::Color {
            tag,
            child: Box::new(self),
        }
    }

    /// Places the node without moving it.
    pub fn placed(self) -> Placed {
        Placed::new(self)
    }

    /// Places the node at an offset.
    pub fn at(self, x: f64, y: f64, z: f64) -> Placed {
        Placed::new(self).translated(x, y, z)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Cylinder { .. } | Self::Cube { .. })
    }

    /// Boolean operator for composite nodes.
    pub fn operation(&self) -> Option<BooleanOp> {
        match self {
            Self::Union { .. } => Some(BooleanOp::Union),
            Self::Difference { .. } => Some(BooleanOp::Difference),
            Self::Hull { .. } => Some(BooleanOp::Hull),
            _ => None,
        }
    }

    /// Placed children of a composite; empty for primitives and colors.
    pub fn children(&self) -> &[Placed] {
        match self {
            Self::Union { children } | Self::Difference { children } | Self::Hull { children } => {
                children
            }
            _ => &[],
        }
    }

    /// Every color tag in the tree, depth first.
    pub fn color_tags(&self) -> Vec<&ColorTag> {
        let mut tags = Vec::new();
        collect_tags(self, &mut tags);
        tags
    }

    /// A tree is fit for fabrication when it carries no color tags.
    pub fn is_manufacturable(&self) -> bool {
        self.color_tags().is_empty()
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Color { child, .. } => 1 + child.node_count(),
            _ => {
                1 + self
                    .children()
                    .iter()
                    .map(|c| c.node.node_count())
                    .sum::<usize>()
            }
        }
    }
}

fn collect_tags<'a>(node: &'a SolidNode, out: &mut Vec<&'a ColorTag>) {
    match node {
        SolidNode::Color { tag, child } => {
            out.push(tag);
            collect_tags(child, out);
        }
        _ => {
            for child in node.children() {
                collect_tags(&child.node, out);
            }
        }
    }
}

// =============================================================================
// PLACED CHILD
// =============================================================================

/// A child node together with its placement in the parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placed {
    pub transform: Transform,
    pub node: SolidNode,
}

impl Placed {
    pub fn new(node: SolidNode) -> Self {
        Self {
            transform: Transform::IDENTITY,
            node,
        }
    }

    /// Sets the offset. Rotation, if any, still applies first.
    pub fn translated(mut self, x: f64, y: f64, z: f64) -> Self {
        self.transform.translation = DVec3::new(x, y, z);
        self
    }

    /// Sets the rotation in degrees about X, Y, Z.
    pub fn rotated(mut self, x: f64, y: f64, z: f64) -> Self {
        self.transform.rotation = DVec3::new(x, y, z);
        self
    }
}

impl From<SolidNode> for Placed {
    fn from(node: SolidNode) -> Self {
        Placed::new(node)
    }
}

impl From<Solid> for Placed {
    fn from(solid: Solid) -> Self {
        Placed::new(solid.root)
    }
}

// =============================================================================
// SOLID
// =============================================================================

/// A finished tree plus the non-fatal findings about it.
///
/// Diagnostics cover the whole tree, so a parent built from child solids
/// reports its children's findings too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    /// Root geometry node.
    pub root: SolidNode,
    /// Degenerate-geometry findings.
    pub diagnostics: Vec<Diagnostic>,
}

impl Solid {
    /// Wraps a tree and runs the degenerate-geometry analysis over it.
    pub fn new(root: SolidNode) -> Self {
        let diagnostics = analysis::diagnose(&root);
        for diagnostic in &diagnostics {
            warn!(path = ?diagnostic.path, "{}", diagnostic.message);
        }
        Self { root, diagnostics }
    }

    /// True when any finding reports a no-op or empty result.
    pub fn is_degenerate(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_degenerate)
    }

    /// Places the solid at an offset, dropping diagnostics (the parent
    /// recomputes them).
    pub fn at(self, x: f64, y: f64, z: f64) -> Placed {
        self.root.at(x, y, z)
    }

    /// Wraps the root with a material tag.
    pub fn colored(self, tag: ColorTag) -> Self {
        Self {
            root: self.root.colored(tag),
            diagnostics: self.diagnostics,
        }
    }
}

#[cfg(test)]
mod tests;
