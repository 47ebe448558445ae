//! # Flight Controller Mount
//!
//! Four standoff posts on the FC's square bolt pattern. The posts are solid;
//! screw holes are drilled or tapped after printing.

use config::{DesignConfig, Quality};
use dronecad_csg::boolean::union;
use dronecad_csg::error::require_positive;
use dronecad_csg::primitives::cylinder;
use dronecad_csg::{GeometryError, Solid};
use tracing::debug;

/// Corner signs of a square pattern, counter-clockwise from +X+Y.
pub const CORNERS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// Builds the standoff posts for a square FC pattern of side `spacing` (mm).
///
/// # Example
///
/// ```rust
/// use config::DesignConfig;
/// use dronecad_parts::fc_mount;
///
/// let posts = fc_mount(30.5, &DesignConfig::default()).unwrap();
/// assert_eq!(posts.root.children().len(), 4);
/// assert_eq!(posts.root.children()[0].transform.translation.x, 15.25);
/// ```
pub fn fc_mount(spacing: f64, config: &DesignConfig) -> Result<Solid, GeometryError> {
    debug!(spacing, "building fc mount");

    require_positive("spacing", spacing)?;

    let post = cylinder(
        config.fc_mount.post_height,
        config.fc_mount.post_radius,
        false,
        config.resolution.segments(Quality::Decorative),
    )?;
    let half = spacing / 2.0;

    union(
        CORNERS
            .iter()
            .map(|&(sx, sy)| post.clone().at(sx * half, sy * half, 0.0)),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use dronecad_csg::SolidNode;

    use super::*;

    #[test]
    fn test_posts_on_pattern() {
        let posts = fc_mount(30.5, &DesignConfig::default()).unwrap();
        let children = posts.root.children();
        assert_eq!(children.len(), 4);
        for child in children {
            let t = child.transform.translation;
            assert_relative_eq!(t.x.abs(), 15.25);
            assert_relative_eq!(t.y.abs(), 15.25);
            assert_eq!(t.z, 0.0);
            assert!(matches!(
                child.node,
                SolidNode::Cylinder { height, radius, center: false, .. } if height == 5.0 && radius == 2.0
            ));
        }
    }

    #[test]
    fn test_every_corner_used_once() {
        let posts = fc_mount(20.0, &DesignConfig::default()).unwrap();
        let mut quadrants: Vec<(bool, bool)> = posts
            .root
            .children()
            .iter()
            .map(|c| (c.transform.translation.x > 0.0, c.transform.translation.y > 0.0))
            .collect();
        quadrants.sort();
        quadrants.dedup();
        assert_eq!(quadrants.len(), 4);
    }

    #[test]
    fn test_post_overrides() {
        let mut cfg = DesignConfig::default();
        cfg.fc_mount.post_height = 8.0;
        cfg.fc_mount.post_radius = 2.5;
        let posts = fc_mount(25.5, &cfg).unwrap();
        assert!(matches!(
            posts.root.children()[0].node,
            SolidNode::Cylinder { height, radius, .. } if height == 8.0 && radius == 2.5
        ));
    }

    #[test]
    fn test_rejects_zero_spacing() {
        assert!(fc_mount(0.0, &DesignConfig::default()).is_err());
    }
}
