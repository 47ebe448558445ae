//! # Motor Mount
//!
//! Round adapter plate that bolts a brushless motor to an arm tip.
//!
//! ```text
//!          ┌───── bolt_spacing/2 + rim_margin ─────┐
//!     ╭────────────────────────────────────────────╮
//!     │     o          ( shaft )          o        │  height
//!     ╰────────────────────────────────────────────╯
//! ```
//!
//! The disc rests on z=0. Every hole is taller than the disc by
//! `hole_clearance` on both faces and centered on the disc mid-plane, so the
//! cut never leaves a skin.

use config::{DesignConfig, Quality};
use dronecad_csg::boolean::difference;
use dronecad_csg::error::require_positive;
use dronecad_csg::primitives::cylinder;
use dronecad_csg::{GeometryError, Placed, Solid};
use tracing::debug;

/// Unit directions of the four bolt holes: 0°, 90°, 180°, 270°.
pub const BOLT_DIRECTIONS: [(f64, f64); 4] = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];

/// Builds a motor mount.
///
/// # Arguments
///
/// * `bolt_spacing` - Motor bolt-circle diameter (mm)
/// * `shaft_hole` - Central shaft clearance diameter (mm)
/// * `bolt_hole_size` - Bolt hole diameter (mm); see
///   [`crate::fastener::bolt_hole_diameter`] for a sensible pick
///
/// Whether the bolt holes breach the rim is left to the caller.
///
/// # Example
///
/// ```rust
/// use config::DesignConfig;
/// use dronecad_csg::SolidNode;
/// use dronecad_parts::motor_mount;
///
/// let mount = motor_mount(16.0, 5.0, 2.2, &DesignConfig::default()).unwrap();
/// // disc + shaft hole + four bolt holes
/// assert_eq!(mount.root.children().len(), 6);
/// assert!(matches!(mount.root.children()[0].node, SolidNode::Cylinder { radius, .. } if radius == 11.0));
/// ```
pub fn motor_mount(
    bolt_spacing: f64,
    shaft_hole: f64,
    bolt_hole_size: f64,
    config: &DesignConfig,
) -> Result<Solid, GeometryError> {
    debug!(bolt_spacing, shaft_hole, bolt_hole_size, "building motor mount");

    require_positive("bolt_spacing", bolt_spacing)?;
    require_positive("shaft_hole", shaft_hole)?;
    require_positive("bolt_hole_size", bolt_hole_size)?;

    let params = &config.motor_mount;
    let segments = config.resolution.segments(Quality::Structural);

    let bolt_radius = bolt_spacing / 2.0;
    let disc = cylinder(params.height, bolt_radius + params.rim_margin, false, segments)?;

    let hole_height = params.height + 2.0 * params.hole_clearance;
    let mid_plane = params.height / 2.0;

    let mut holes: Vec<Placed> = Vec::with_capacity(1 + BOLT_DIRECTIONS.len());
    holes.push(cylinder(hole_height, shaft_hole / 2.0, true, segments)?.at(0.0, 0.0, mid_plane));
    for (dx, dy) in BOLT_DIRECTIONS {
        let bolt = cylinder(hole_height, bolt_hole_size / 2.0, true, segments)?;
        holes.push(bolt.at(dx * bolt_radius, dy * bolt_radius, mid_plane));
    }

    difference(disc, holes)
}
