//! # Fastener Heuristics
//!
//! Picks screw sizes from a motor's bolt pattern and a frame size from the
//! prop, so callers that only know the headline motor and prop numbers can
//! still build a consistent kit.

use config::constants::{
    M1_4_PILOT_HOLE, M2_CLEARANCE_HOLE, M2_INSERT_HOLE, M2_PATTERN_THRESHOLD, M3_CLEARANCE_HOLE,
    M3_INSERT_HOLE, M3_PATTERN_THRESHOLD, WHEELBASE_PROP_MARGIN,
};
use serde::{Deserialize, Serialize};

/// Screw size class implied by a motor bolt pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrewClass {
    M3,
    M2,
    /// M1.4 self-tapping screws, used on whoop-class motors.
    M1_4,
}

impl ScrewClass {
    /// Classifies a motor by its bolt-circle diameter (mm).
    pub fn for_pattern(motor_mount_spacing: f64) -> Self {
        if motor_mount_spacing > M3_PATTERN_THRESHOLD {
            Self::M3
        } else if motor_mount_spacing > M2_PATTERN_THRESHOLD {
            Self::M2
        } else {
            Self::M1_4
        }
    }

    /// Hole diameter (mm) for a plain clearance fit or a heat-set insert.
    ///
    /// M1.4 screws tap straight into plastic, so inserts do not change the
    /// pilot hole.
    pub fn hole_diameter(&self, use_inserts: bool) -> f64 {
        match (self, use_inserts) {
            (Self::M3, false) => M3_CLEARANCE_HOLE,
            (Self::M3, true) => M3_INSERT_HOLE,
            (Self::M2, false) => M2_CLEARANCE_HOLE,
            (Self::M2, true) => M2_INSERT_HOLE,
            (Self::M1_4, _) => M1_4_PILOT_HOLE,
        }
    }
}

/// Bolt hole diameter (mm) for a motor bolt pattern.
///
/// # Example
///
/// ```rust
/// use dronecad_parts::bolt_hole_diameter;
///
/// assert_eq!(bolt_hole_diameter(16.0, false), 3.2);
/// assert_eq!(bolt_hole_diameter(9.0, true), 3.2);
/// assert_eq!(bolt_hole_diameter(6.6, true), 1.5);
/// ```
pub fn bolt_hole_diameter(motor_mount_spacing: f64, use_inserts: bool) -> f64 {
    ScrewClass::for_pattern(motor_mount_spacing).hole_diameter(use_inserts)
}

/// Wheelbase (mm) that keeps adjacent props of this diameter clear of each
/// other.
pub fn wheelbase_for_prop(prop_diameter: f64) -> f64 {
    2.0 * prop_diameter + WHEELBASE_PROP_MARGIN
}
