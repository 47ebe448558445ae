//! # Frame Kit
//!
//! The frame body with motor mounts at every arm tip and the FC standoffs on
//! top of the hub, as one printable tree.

use config::constants::{DEFAULT_ARM_THICKNESS, DEFAULT_BOLT_HOLE_DIAMETER, DEFAULT_KIT_SHAFT_HOLE};
use config::DesignConfig;
use dronecad_csg::boolean::union;
use dronecad_csg::{GeometryError, Placed, Solid};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fc_mount::{fc_mount, CORNERS};
use crate::frame::frame_body;
use crate::motor_mount::motor_mount;

/// Inputs for [`frame_kit`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameKitSpec {
    pub wheelbase: f64,
    #[serde(default = "default_arm_thickness")]
    pub arm_thickness: f64,
    /// Motor bolt-circle diameter.
    pub motor_mounting: f64,
    #[serde(default = "default_shaft_hole")]
    pub shaft_hole: f64,
    #[serde(default = "default_bolt_hole")]
    pub bolt_hole_size: f64,
    /// FC bolt pattern side.
    pub fc_spacing: f64,
}

fn default_arm_thickness() -> f64 {
    DEFAULT_ARM_THICKNESS
}

fn default_shaft_hole() -> f64 {
    DEFAULT_KIT_SHAFT_HOLE
}

fn default_bolt_hole() -> f64 {
    DEFAULT_BOLT_HOLE_DIAMETER
}

impl FrameKitSpec {
    /// Kit for the given wheelbase and mounting patterns with default arm,
    /// shaft and bolt sizes.
    pub fn new(wheelbase: f64, motor_mounting: f64, fc_spacing: f64) -> Self {
        Self {
            wheelbase,
            arm_thickness: DEFAULT_ARM_THICKNESS,
            motor_mounting,
            shaft_hole: DEFAULT_KIT_SHAFT_HOLE,
            bolt_hole_size: DEFAULT_BOLT_HOLE_DIAMETER,
            fc_spacing,
        }
    }
}

/// Builds the whole printable frame.
///
/// Children, in order: the frame body, the four motor mounts (same corner
/// order as the arms), then the FC mount raised to `z = arm_thickness`.
pub fn frame_kit(spec: &FrameKitSpec, config: &DesignConfig) -> Result<Solid, GeometryError> {
    debug!(?spec, "building frame kit");

    let body = frame_body(spec.wheelbase, spec.arm_thickness, config)?;
    let mount = motor_mount(spec.motor_mounting, spec.shaft_hole, spec.bolt_hole_size, config)?;
    let stack = fc_mount(spec.fc_spacing, config)?;
    let offset = config.frame.motor_offset(spec.wheelbase);

    let mut parts: Vec<Placed> = Vec::with_capacity(2 + CORNERS.len());
    parts.push(body.into());
    for (sx, sy) in CORNERS {
        parts.push(mount.clone().at(sx * offset, sy * offset, 0.0));
    }
    parts.push(stack.at(0.0, 0.0, spec.arm_thickness));

    union(parts)
}
