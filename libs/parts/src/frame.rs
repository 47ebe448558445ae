//! # Frame Body
//!
//! X-frame made of four arms. Each arm is the hull of a hub disc at the
//! origin and a smaller tip disc under its motor, so the arms overlap at the
//! hub and the body is one connected piece.

use config::{DesignConfig, Quality};
use dronecad_csg::boolean::{hull, union};
use dronecad_csg::error::require_positive;
use dronecad_csg::primitives::cylinder;
use dronecad_csg::{GeometryError, Solid};
use tracing::debug;

use crate::fc_mount::CORNERS;

/// Builds the frame body.
///
/// Arms sit on the 45° diagonals with their tips at
/// `(±d, ±d, 0)`, `d = wheelbase / 2 × diagonal_factor`.
///
/// # Example
///
/// ```rust
/// use config::DesignConfig;
/// use dronecad_parts::frame_body;
///
/// let body = frame_body(200.0, 4.0, &DesignConfig::default()).unwrap();
/// assert_eq!(body.root.children().len(), 4);
/// assert!(body.diagnostics.is_empty());
/// ```
pub fn frame_body(
    wheelbase: f64,
    arm_thickness: f64,
    config: &DesignConfig,
) -> Result<Solid, GeometryError> {
    debug!(wheelbase, arm_thickness, "building frame body");

    require_positive("wheelbase", wheelbase)?;
    require_positive("arm_thickness", arm_thickness)?;

    let frame = &config.frame;
    let segments = config.resolution.segments(Quality::Structural);
    let hub = cylinder(arm_thickness, frame.hub_radius, false, segments)?;
    let tip = cylinder(arm_thickness, frame.tip_radius, false, segments)?;
    let offset = frame.motor_offset(wheelbase);

    let mut arms = Vec::with_capacity(CORNERS.len());
    for (sx, sy) in CORNERS {
        let arm = hull([hub.clone().placed(), tip.clone().at(sx * offset, sy * offset, 0.0)])?;
        arms.push(arm);
    }

    union(arms)
}
