//! # Bounds and Support Points
//!
//! Cheap geometric summaries of a tree, used by the degenerate-geometry
//! analysis. Points are the vertices a mesh compiler would generate for the
//! primitives, so bounds match the tessellated result rather than the ideal
//! circle.

use std::f64::consts::PI;

use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::node::{Placed, SolidNode};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Smallest box around the points; `None` when there are none.
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let first = *points.first()?;
        let mut aabb = Self {
            min: first,
            max: first,
        };
        for &p in &points[1..] {
            aabb.min = aabb.min.min(p);
            aabb.max = aabb.max.max(p);
        }
        Some(aabb)
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// True when the boxes share volume deeper than `tolerance` on every axis.
    pub fn overlaps(&self, other: &Aabb, tolerance: f64) -> bool {
        let lo = self.min.max(other.min);
        let hi = self.max.min(other.max);
        (hi - lo).min_element() > tolerance
    }

    /// True when the boxes overlap or are within `tolerance` of touching.
    pub fn touches(&self, other: &Aabb, tolerance: f64) -> bool {
        let lo = self.min.max(other.min);
        let hi = self.max.min(other.max);
        (hi - lo).min_element() >= -tolerance
    }

    pub fn contains(&self, point: DVec3, tolerance: f64) -> bool {
        point.cmpge(self.min - tolerance).all() && point.cmple(self.max + tolerance).all()
    }
}

/// Vertices of the tessellated node, in the node's own frame.
///
/// For a difference only the base contributes, which bounds the result
/// from outside.
pub fn support_points(node: &SolidNode) -> Vec<DVec3> {
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
            // Unvalidated trees may carry any count; never sample more than
            // a valid tessellation would.
            let segments = (*segments).clamp(MIN_SEGMENTS, MAX_SEGMENTS);
            let mut points = Vec::with_capacity(segments as usize * 2);
            for z in [z_bottom, z_top] {
                for j in 0..segments {
                    let theta = 2.0 * PI * f64::from(j) / f64::from(segments);
                    points.push(DVec3::new(radius * theta.cos(), radius * theta.sin(), z));
                }
            }
            points
        }
        SolidNode::Cube { size, center } => {
            let min = if *center { -*size * 0.5 } else { DVec3::ZERO };
            let max = min + *size;
            let mut points = Vec::with_capacity(8);
            for x in [min.x, max.x] {
                for y in [min.y, max.y] {
                    for z in [min.z, max.z] {
                        points.push(DVec3::new(x, y, z));
                    }
                }
            }
            points
        }
        SolidNode::Union { children } | SolidNode::Hull { children } => {
            children.iter().flat_map(placed_points).collect()
        }
        SolidNode::Difference { children } => {
            children.first().map(placed_points).unwrap_or_default()
        }
        SolidNode::Color { child, .. } => support_points(child),
    }
}

/// Support points of a child, mapped into the parent frame.
pub fn placed_points(placed: &Placed) -> Vec<DVec3> {
    let points = support_points(&placed.node);
    if placed.transform.is_identity() {
        return points;
    }
    let matrix = placed.transform.matrix();
    points
        .into_iter()
        .map(|p| matrix.transform_point3(p))
        .collect()
}

/// Bounding box of a node in its own frame.
pub fn bounds(node: &SolidNode) -> Option<Aabb> {
    Aabb::from_points(&support_points(node))
}

/// Bounding box of a child in the parent frame.
pub fn placed_bounds(placed: &Placed) -> Option<Aabb> {
    Aabb::from_points(&placed_points(placed))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{cube, cylinder};
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_bounds() {
        let node = cylinder(3.0, 11.0, false, 60).unwrap();
        let aabb = bounds(&node).unwrap();
        assert_relative_eq!(aabb.min.x, -11.0, epsilon = 1e-9);
        assert_relative_eq!(aabb.max.x, 11.0, epsilon = 1e-9);
        assert_relative_eq!(aabb.max.y, 11.0, epsilon = 1e-9);
        assert_relative_eq!(aabb.min.z, 0.0);
        assert_relative_eq!(aabb.max.z, 3.0);
    }

    #[test]
    fn test_centered_cube_bounds() {
        let node = cube([20.0, 16.0, 20.0], true).unwrap();
        let aabb = bounds(&node).unwrap();
        assert_eq!(aabb.min, DVec3::new(-10.0, -8.0, -10.0));
        assert_eq!(aabb.size(), DVec3::new(20.0, 16.0, 20.0));
    }

    #[test]
    fn test_placed_bounds_follow_translation() {
        let placed = cube([2.0, 2.0, 2.0], true).unwrap().at(10.0, 0.0, 0.0);
        let aabb = placed_bounds(&placed).unwrap();
        assert_eq!(aabb.center(), DVec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_overlap_versus_touch() {
        let a = Aabb {
            min: DVec3::ZERO,
            max: DVec3::ONE,
        };
        let b = Aabb {
            min: DVec3::new(1.0, 0.0, 0.0),
            max: DVec3::new(2.0, 1.0, 1.0),
        };
        assert!(!a.overlaps(&b, 1e-6));
        assert!(a.touches(&b, 1e-6));
    }
}
