//! # Assembly Layout
//!
//! Where a viewer puts each asset to show the assembled drone. The frame is
//! the reference: motors and props sit over the arm tips, the FC stack over
//! the hub, the camera ahead on +Y and the battery underneath.

use config::DesignConfig;
use dronecad_csg::error::require_positive;
use dronecad_csg::{GeometryError, Transform};
use serde::{Deserialize, Serialize};

use crate::fc_mount::CORNERS;

/// The distinct assets of a drone build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Frame,
    Motor,
    Prop,
    Fc,
    Camera,
    Battery,
}

impl AssetKind {
    pub const ALL: [AssetKind; 6] = [
        Self::Frame,
        Self::Motor,
        Self::Prop,
        Self::Fc,
        Self::Camera,
        Self::Battery,
    ];
}

/// One instance of an asset in the assembled view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub asset: AssetKind,
    pub transform: Transform,
}

impl Placement {
    fn at(asset: AssetKind, [x, y, z]: [f64; 3]) -> Self {
        Self {
            asset,
            transform: Transform::translate(x, y, z),
        }
    }
}

/// Placements for a frame of the given wheelbase.
///
/// One frame, four motors, four props, then the FC, camera and battery.
///
/// # Example
///
/// ```rust
/// use config::DesignConfig;
/// use dronecad_parts::{assembly_layout, AssetKind};
///
/// let layout = assembly_layout(200.0, &DesignConfig::default()).unwrap();
/// assert_eq!(layout.len(), 12);
/// assert_eq!(layout.iter().filter(|p| p.asset == AssetKind::Prop).count(), 4);
/// ```
pub fn assembly_layout(
    wheelbase: f64,
    config: &DesignConfig,
) -> Result<Vec<Placement>, GeometryError> {
    require_positive("wheelbase", wheelbase)?;

    let layout = &config.layout;
    let offset = config.frame.motor_offset(wheelbase);
    let prop_height = layout.motor_height + layout.prop_lift;

    let mut placements = vec![Placement::at(AssetKind::Frame, [0.0; 3])];
    placements.extend(CORNERS.iter().map(|&(sx, sy)| {
        Placement::at(AssetKind::Motor, [sx * offset, sy * offset, layout.motor_height])
    }));
    placements.extend(CORNERS.iter().map(|&(sx, sy)| {
        Placement::at(AssetKind::Prop, [sx * offset, sy * offset, prop_height])
    }));
    placements.push(Placement::at(AssetKind::Fc, layout.stack_position));
    placements.push(Placement::at(AssetKind::Camera, layout.camera_position));
    placements.push(Placement::at(AssetKind::Battery, layout.battery_position));
    Ok(placements)
}
