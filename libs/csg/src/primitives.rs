//! # Solid Primitives
//!
//! Validated constructors for the two primitive solids. Every length must be
//! finite and positive and every circle needs at least three segments, so a
//! tree built from these can always be handed to a mesh compiler.

use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec3;

use crate::error::{require_positive, GeometryError};
use crate::node::SolidNode;

/// Creates a cylinder along +Z.
///
/// # Arguments
///
/// * `height` - Extent along Z
/// * `radius` - Circle radius
/// * `center` - If true, spans `-height/2..height/2` instead of `0..height`
/// * `segments` - Edges approximating the circle (3..=1000)
///
/// # Example
///
/// ```rust
/// use dronecad_csg::primitives::cylinder;
///
/// let bore = cylinder(5.0, 1.1, true, 60).unwrap();
/// assert!(bore.is_primitive());
/// assert!(cylinder(5.0, 1.1, true, 2).is_err());
/// ```
pub fn cylinder(
    height: f64,
    radius: f64,
    center: bool,
    segments: u32,
) -> Result<SolidNode, GeometryError> {
    require_positive("height", height)?;
    require_positive("radius", radius)?;
    require_segments(segments)?;
    Ok(SolidNode::Cylinder {
        height,
        radius,
        center,
        segments,
    })
}

/// Creates an axis-aligned box.
///
/// # Example
///
/// ```rust
/// use dronecad_csg::primitives::cube;
///
/// let body = cube([20.0, 16.0, 20.0], true).unwrap();
/// assert!(body.is_primitive());
/// assert!(cube([20.0, 0.0, 20.0], true).is_err());
/// ```
pub fn cube(size: [f64; 3], center: bool) -> Result<SolidNode, GeometryError> {
    require_positive("size.x", size[0])?;
    require_positive("size.y", size[1])?;
    require_positive("size.z", size[2])?;
    Ok(SolidNode::Cube {
        size: DVec3::from_array(size),
        center,
    })
}

/// Rejects segment counts that cannot close a polygon or exceed
/// [`MAX_SEGMENTS`].
pub fn require_segments(segments: u32) -> Result<u32, GeometryError> {
    if segments < MIN_SEGMENTS {
        return Err(GeometryError::invalid_dimension(
            "segments",
            f64::from(segments),
            "at least 3 segments required",
        ));
    }
    if segments > MAX_SEGMENTS {
        return Err(GeometryError::invalid_dimension(
            "segments",
            f64::from(segments),
            "at most 1000 segments allowed",
        ));
    }
    Ok(segments)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_keeps_parameters() {
        let node = cylinder(3.0, 11.0, false, 60).unwrap();
        assert_eq!(
            node,
            SolidNode::Cylinder {
                height: 3.0,
                radius: 11.0,
                center: false,
                segments: 60
            }
        );
    }

    #[test]
    fn test_cylinder_rejects_non_positive() {
        for (h, r) in [(0.0, 1.0), (-3.0, 1.0), (3.0, 0.0), (3.0, -0.5)] {
            let err = cylinder(h, r, false, 20).unwrap_err();
            assert!(matches!(err, GeometryError::InvalidDimension { .. }));
        }
    }

    #[test]
    fn test_segments_minimum_is_three() {
        assert!(cylinder(1.0, 1.0, false, 3).is_ok());
        let err = cylinder(1.0, 1.0, false, 2).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::InvalidDimension {
                name: "segments",
                ..
            }
        ));
    }

    #[test]
    fn test_segments_maximum() {
        assert!(cylinder(1.0, 1.0, false, MAX_SEGMENTS).is_ok());
        for segments in [MAX_SEGMENTS + 1, u32::MAX] {
            let err = cylinder(1.0, 1.0, false, segments).unwrap_err();
            assert!(matches!(
                err,
                GeometryError::InvalidDimension {
                    name: "segments",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_cube_rejects_each_axis() {
        assert!(cube([0.0, 1.0, 1.0], false).is_err());
        assert!(cube([1.0, -1.0, 1.0], false).is_err());
        assert!(cube([1.0, 1.0, f64::NAN], false).is_err());
        assert!(cube([1.0, 2.0, 3.0], false).is_ok());
    }
}
