//! # Tree Analysis
//!
//! Structural validation and degenerate-geometry detection.
//!
//! The degenerate checks are conservative: they work on tessellated support
//! points and bounding boxes, so a finding is always real, but some no-op
//! compositions (e.g. a subtractor inside the base's bounding box that still
//! misses the base) go unreported.

use config::constants::CONTACT_TOLERANCE;
use glam::DVec3;

use crate::bounds::{placed_bounds, placed_points, Aabb};
use crate::diagnostic::{Degeneracy, Diagnostic};
use crate::error::{require_positive, GeometryError};
use crate::node::{Placed, SolidNode};
use crate::primitives::require_segments;

// =============================================================================
// DEGENERATE GEOMETRY
// =============================================================================

/// Finds every degenerate composition in the tree.
///
/// # Example
///
/// ```rust
/// use dronecad_csg::analysis::diagnose;
/// use dronecad_csg::primitives::cylinder;
/// use dronecad_csg::SolidNode;
///
/// let tree = SolidNode::Difference {
///     children: vec![
///         cylinder(3.0, 10.0, false, 60).unwrap().placed(),
///         cylinder(3.0, 1.0, false, 60).unwrap().at(50.0, 0.0, 0.0),
///     ],
/// };
/// assert_eq!(diagnose(&tree).len(), 1);
/// ```
pub fn diagnose(root: &SolidNode) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    let mut path = Vec::new();
    visit(root, &mut path, &mut out);
    out
}

fn visit(node: &SolidNode, path: &mut Vec<usize>, out: &mut Vec<Diagnostic>) {
    match node {
        SolidNode::Color { child, .. } => visit(child, path, out),
        SolidNode::Difference { children } => {
            check_difference(children, path, out);
            visit_children(children, path, out);
        }
        SolidNode::Hull { children } => {
            check_hull(children, path, out);
            visit_children(children, path, out);
        }
        SolidNode::Union { children } => visit_children(children, path, out),
        SolidNode::Cylinder { .. } | SolidNode::Cube { .. } => {}
    }
}

fn visit_children(children: &[Placed], path: &mut Vec<usize>, out: &mut Vec<Diagnostic>) {
    for (index, child) in children.iter().enumerate() {
        path.push(index);
        visit(&child.node, path, out);
        path.pop();
    }
}

fn check_difference(children: &[Placed], path: &[usize], out: &mut Vec<Diagnostic>) {
    let Some((base, subtractors)) = children.split_first() else {
        return;
    };
    let Some(base_bounds) = placed_bounds(base) else {
        return;
    };
    let base_points = placed_points(base);

    for (offset, subtractor) in subtractors.iter().enumerate() {
        let index = offset + 1;
        let Some(sub_bounds) = placed_bounds(subtractor) else {
            continue;
        };
        if !base_bounds.overlaps(&sub_bounds, CONTACT_TOLERANCE) {
            out.push(
                Diagnostic::degenerate(
                    Degeneracy::DisjointSubtractor { index },
                    format!("difference child {index} does not intersect the base"),
                    path.to_vec(),
                )
                .with_hint("the base is returned unchanged; check the subtractor placement"),
            );
        } else if encloses(subtractor, &base_points) {
            out.push(
                Diagnostic::degenerate(
                    Degeneracy::FullySubtracted { index },
                    format!("difference child {index} encloses the base"),
                    path.to_vec(),
                )
                .with_hint("no volume remains; the subtractor is larger than the base"),
            );
        }
    }
}

fn check_hull(children: &[Placed], path: &[usize], out: &mut Vec<Diagnostic>) {
    let Some((first, rest)) = children.split_first() else {
        return;
    };
    if !rest.is_empty() && rest.iter().all(|c| c == first) {
        out.push(Diagnostic::degenerate(
            Degeneracy::CoincidentHull,
            format!("all {} hull children coincide", children.len()),
            path.to_vec(),
        ));
    }
}

/// True when `outer` is a convex primitive containing every point.
///
/// Non-convex subtrees always answer false.
pub fn encloses(outer: &Placed, points: &[DVec3]) -> bool {
    if points.is_empty() {
        return false;
    }
    let inverse = outer.transform.matrix().inverse();
    points
        .iter()
        .all(|&p| contains_local(&outer.node, inverse.transform_point3(p)))
}

fn contains_local(node: &SolidNode, p: DVec3) -> bool {
    let tol = CONTACT_TOLERANCE;
    match node {
        SolidNode::Cylinder {
            height,
            radius,
            center,
            segments,
        } => {
            let (z_bottom, z_top) = if *center {
                (-height / 2.0, height / 2.0)
            } else {
                (0.0, *height)
            };
            // Apothem of the tessellated polygon, the radius it surely covers.
            let apothem = radius * (std::f64::consts::PI / f64::from(*segments)).cos();
            p.z >= z_bottom - tol
                && p.z <= z_top + tol
                && p.x.hypot(p.y) <= apothem + tol
        }
        SolidNode::Cube { size, center } => {
            let min = if *center { -*size * 0.5 } else { DVec3::ZERO };
            Aabb {
                min,
                max: min + *size,
            }
            .contains(p, tol)
        }
        SolidNode::Color { child, .. } => contains_local(child, p),
        SolidNode::Union { .. } | SolidNode::Difference { .. } | SolidNode::Hull { .. } => false,
    }
}

// =============================================================================
// CONNECTIVITY
// =============================================================================

/// Whether the children form one cluster of touching bounding boxes.
///
/// Bounding-box contact is necessary but not sufficient for a connected
/// union; generators use it as a sanity check on their own layouts.
pub fn is_connected(children: &[Placed]) -> bool {
    let boxes: Vec<Aabb> = children.iter().filter_map(placed_bounds).collect();
    if boxes.len() <= 1 {
        return true;
    }

    let mut parent: Vec<usize> = (0..boxes.len()).collect();
    fn find(parent: &mut [usize], i: usize) -> usize {
        let mut root = i;
        while parent[root] != root {
            root = parent[root];
        }
        parent[i] = root;
        root
    }

    for i in 0..boxes.len() {
        for j in (i + 1)..boxes.len() {
            if boxes[i].touches(&boxes[j], CONTACT_TOLERANCE) {
                let (a, b) = (find(&mut parent, i), find(&mut parent, j));
                parent[a] = b;
            }
        }
    }
    let root = find(&mut parent, 0);
    (1..boxes.len()).all(|i| find(&mut parent, i) == root)
}

// =============================================================================
// STRUCTURAL VALIDATION
// =============================================================================

/// Checks a tree is well formed: composite arity, positive finite
/// dimensions, segment counts and finite transforms.
///
/// Trees built through [`crate::primitives`] and [`crate::boolean`] always
/// pass; this guards trees deserialized or assembled by hand.
pub fn validate_tree(node: &SolidNode) -> Result<(), GeometryError> {
    match node {
        SolidNode::Cylinder {
            height,
            radius,
            segments,
            ..
        } => {
            require_positive("height", *height)?;
            require_positive("radius", *radius)?;
            require_segments(*segments)?;
            Ok(())
        }
        SolidNode::Cube { size, .. } => {
            require_positive("size.x", size.x)?;
            require_positive("size.y", size.y)?;
            require_positive("size.z", size.z)?;
            Ok(())
        }
        SolidNode::Union { children }
        | SolidNode::Difference { children }
        | SolidNode::Hull { children } => {
            if let Some(operation) = node.operation() {
                if children.len() < operation.min_children() {
                    return Err(GeometryError::arity(
                        operation,
                        operation.min_children(),
                        children.len(),
                    ));
                }
            }
            for child in children {
                validate_transform(child)?;
                validate_tree(&child.node)?;
            }
            Ok(())
        }
        SolidNode::Color { child, .. } => validate_tree(child),
    }
}

fn validate_transform(placed: &Placed) -> Result<(), GeometryError> {
    let t = &placed.transform;
    if t.is_finite() {
        return Ok(());
    }
    let (name, vector) = if t.translation.is_finite() {
        ("rotation", t.rotation)
    } else {
        ("translation", t.translation)
    };
    let value = vector
        .to_array()
        .into_iter()
        .find(|v| !v.is_finite())
        .unwrap_or(f64::NAN);
    Err(GeometryError::invalid_dimension(name, value, "must be finite"))
}
