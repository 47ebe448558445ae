//! # Boolean Composition
//!
//! The only operators that combine solids.
//!
//! ## Operations
//!
//! - `union()` - Combine children
//! - `difference()` - Subtract every later child from the first
//! - `hull()` - Convex envelope around all children
//!
//! ## Example
//!
//! ```rust
//! use dronecad_csg::boolean::difference;
//! use dronecad_csg::primitives::cylinder;
//!
//! let plate = cylinder(3.0, 10.0, false, 60).unwrap();
//! let bore = cylinder(5.0, 2.5, true, 60).unwrap();
//! let washer = difference(plate, [bore.at(0.0, 0.0, 1.5)]).unwrap();
//! assert!(!washer.is_degenerate());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::node::{Placed, Solid, SolidNode};

/// Boolean operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanOp {
    Union,
    Difference,
    Hull,
}

impl BooleanOp {
    /// OpenSCAD module name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Difference => "difference",
            Self::Hull => "hull",
        }
    }

    /// Fewest children the operator accepts.
    pub fn min_children(&self) -> usize {
        1
    }
}

impl fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// BOOLEAN OPERATIONS
// =============================================================================

/// Geometric union of one or more children.
///
/// ## Example
///
/// ```text
/// union() {
///     cylinder(h=5, r=2);
///     translate([10, 0, 0]) cylinder(h=5, r=2);
/// }
/// ```
pub fn union<I>(children: I) -> Result<Solid, GeometryError>
where
    I: IntoIterator,
    I::Item: Into<Placed>,
{
    let children = collect_children(BooleanOp::Union, children)?;
    Ok(Solid::new(SolidNode::Union { children }))
}

/// Base minus each subtractor in turn.
///
/// Subtractors that miss the base, or swallow it whole, are reported as
/// degenerate diagnostics on the returned solid rather than errors.
///
/// ## Example
///
/// ```text
/// difference() {
///     cylinder(h=3, r=11);
///     cylinder(h=5, r=2.5, center=true);  // Subtracted from the disc
/// }
/// ```
pub fn difference<B, I>(base: B, subtractors: I) -> Result<Solid, GeometryError>
where
    B: Into<Placed>,
    I: IntoIterator,
    I::Item: Into<Placed>,
{
    let mut children = vec![base.into()];
    children.extend(subtractors.into_iter().map(Into::into));
    Ok(Solid::new(SolidNode::Difference { children }))
}

/// List form of [`difference`]: the first child is the base.
pub fn difference_of<I>(children: I) -> Result<Solid, GeometryError>
where
    I: IntoIterator,
    I::Item: Into<Placed>,
{
    let children = collect_children(BooleanOp::Difference, children)?;
    Ok(Solid::new(SolidNode::Difference { children }))
}

/// Convex hull enclosing every child.
///
/// A single child's hull is the child itself.
///
/// ## Example
///
/// ```text
/// hull() {
///     cylinder(h=4, r=10);
///     translate([80, 80, 0]) cylinder(h=4, r=5);
/// }
/// ```
pub fn hull<I>(children: I) -> Result<Solid, GeometryError>
where
    I: IntoIterator,
    I::Item: Into<Placed>,
{
    let children = collect_children(BooleanOp::Hull, children)?;
    Ok(Solid::new(SolidNode::Hull { children }))
}

// =============================================================================
// HELPERS
// =============================================================================

fn collect_children<I>(operation: BooleanOp, children: I) -> Result<Vec<Placed>, GeometryError>
where
    I: IntoIterator,
    I::Item: Into<Placed>,
{
    let children: Vec<Placed> = children.into_iter().map(Into::into).collect();
    if children.len() < operation.min_children() {
        return Err(GeometryError::arity(
            operation,
            operation.min_children(),
            children.len(),
        ));
    }
    Ok(children)
}

#[cfg(test)]
mod tests;
