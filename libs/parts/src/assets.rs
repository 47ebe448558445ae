//! # Asset Set
//!
//! Everything a viewer needs for one drone build: the printable frame kit,
//! one proxy per bought component and the layout that places them. Parts are
//! independent of each other and are built on the rayon pool.

use config::constants::{
    ASSET_FC_BOARD_MARGIN, ASSET_MOTOR_DIAMETER_MARGIN, ASSET_MOTOR_HEIGHT, DEFAULT_ARM_THICKNESS,
    DEFAULT_BATTERY_SIZE, DEFAULT_CAMERA_WIDTH, DEFAULT_FC_MOUNTING, DEFAULT_KIT_SHAFT_HOLE,
    DEFAULT_MOTOR_MOUNTING, DEFAULT_PROP_DIAMETER,
};
use config::DesignConfig;
use dronecad_csg::{GeometryError, Solid};
use serde::{Deserialize, Serialize};
use tracing::info_span;

use crate::fastener::{bolt_hole_diameter, wheelbase_for_prop};
use crate::frame_kit::{frame_kit, FrameKitSpec};
use crate::layout::{assembly_layout, AssetKind, Placement};
use crate::proxy::{proxy_battery, proxy_camera, proxy_fc, proxy_motor, proxy_prop};

/// Headline numbers of a drone build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DroneSpec {
    /// Motor bolt-circle diameter (mm).
    pub motor_mounting_mm: f64,
    pub prop_diameter_mm: f64,
    /// FC bolt pattern side (mm).
    pub fc_mounting_mm: f64,
    pub camera_width_mm: f64,
    /// Size holes for heat-set inserts instead of plain clearance.
    pub use_inserts: bool,
    /// [length, width, height] (mm).
    pub battery_mm: [f64; 3],
}

impl Default for DroneSpec {
    fn default() -> Self {
        Self {
            motor_mounting_mm: DEFAULT_MOTOR_MOUNTING,
            prop_diameter_mm: DEFAULT_PROP_DIAMETER,
            fc_mounting_mm: DEFAULT_FC_MOUNTING,
            camera_width_mm: DEFAULT_CAMERA_WIDTH,
            use_inserts: false,
            battery_mm: DEFAULT_BATTERY_SIZE,
        }
    }
}

impl DroneSpec {
    /// Wheelbase sized for the props.
    pub fn wheelbase(&self) -> f64 {
        wheelbase_for_prop(self.prop_diameter_mm)
    }

    /// Frame kit for this build.
    pub fn frame_kit(&self) -> FrameKitSpec {
        FrameKitSpec {
            wheelbase: self.wheelbase(),
            arm_thickness: DEFAULT_ARM_THICKNESS,
            motor_mounting: self.motor_mounting_mm,
            shaft_hole: DEFAULT_KIT_SHAFT_HOLE,
            bolt_hole_size: bolt_hole_diameter(self.motor_mounting_mm, self.use_inserts),
            fc_spacing: self.fc_mounting_mm,
        }
    }
}

/// Generated assets for one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSet {
    pub wheelbase: f64,
    /// Printable frame kit.
    pub frame: Solid,
    pub motor: Solid,
    pub prop: Solid,
    pub fc: Solid,
    pub camera: Solid,
    pub battery: Solid,
    pub layout: Vec<Placement>,
}

impl AssetSet {
    /// The solid drawn for a layout entry.
    pub fn solid(&self, kind: AssetKind) -> &Solid {
        match kind {
            AssetKind::Frame => &self.frame,
            AssetKind::Motor => &self.motor,
            AssetKind::Prop => &self.prop,
            AssetKind::Fc => &self.fc,
            AssetKind::Camera => &self.camera,
            AssetKind::Battery => &self.battery,
        }
    }
}

/// Builds every asset of a drone build.
///
/// The first failing part aborts the whole set.
///
/// # Example
///
/// ```rust
/// use config::DesignConfig;
/// use dronecad_parts::{generate_assets, DroneSpec};
///
/// let assets = generate_assets(&DroneSpec::default(), &DesignConfig::default()).unwrap();
/// assert_eq!(assets.wheelbase, 77.0);
/// assert!(assets.frame.root.is_manufacturable());
/// assert!(!assets.prop.root.is_manufacturable());
/// ```
pub fn generate_assets(spec: &DroneSpec, config: &DesignConfig) -> Result<AssetSet, GeometryError> {
    let wheelbase = spec.wheelbase();
    let _span = info_span!("generate_assets", wheelbase).entered();

    let kit = spec.frame_kit();
    let [battery_length, battery_width, battery_height] = spec.battery_mm;

    let ((frame, motor), ((prop, fc), (camera, battery))) = rayon::join(
        || {
            rayon::join(
                || frame_kit(&kit, config),
                || {
                    proxy_motor(
                        spec.motor_mounting_mm + ASSET_MOTOR_DIAMETER_MARGIN,
                        ASSET_MOTOR_HEIGHT,
                        config,
                    )
                },
            )
        },
        || {
            rayon::join(
                || {
                    rayon::join(
                        || proxy_prop(spec.prop_diameter_mm, config),
                        || {
                            proxy_fc(
                                spec.fc_mounting_mm,
                                spec.fc_mounting_mm + ASSET_FC_BOARD_MARGIN,
                                config,
                            )
                        },
                    )
                },
                || {
                    rayon::join(
                        || proxy_camera(spec.camera_width_mm, config),
                        || proxy_battery(battery_length, battery_width, battery_height, config),
                    )
                },
            )
        },
    );

    Ok(AssetSet {
        wheelbase,
        frame: frame?,
        motor: motor?,
        prop: prop?,
        fc: fc?,
        camera: camera?,
        battery: battery?,
        layout: assembly_layout(wheelbase, config)?,
    })
}

#[cfg(test)]
mod tests;
