//! # Part Configuration
//!
//! Overridable defaults for every part generator. `Default` reproduces the
//! documented outputs exactly; orchestrators that need different proportions
//! deserialize a partial document and let serde fill in the rest.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{require_finite, require_positive, ConfigError};
use crate::resolution::ResolutionPolicy;

/// Motor mount disc proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorMountConfig {
    /// Disc thickness (mm).
    pub height: f64,
    /// Rim margin outside the bolt circle (mm).
    pub rim_margin: f64,
    /// Hole overshoot above and below the disc (mm).
    pub hole_clearance: f64,
}

impl Default for MotorMountConfig {
    fn default() -> Self {
        Self {
            height: MOTOR_MOUNT_HEIGHT,
            rim_margin: MOTOR_MOUNT_RIM_MARGIN,
            hole_clearance: THROUGH_HOLE_CLEARANCE,
        }
    }
}

impl MotorMountConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("motor_mount.height", self.height)?;
        require_positive("motor_mount.rim_margin", self.rim_margin)?;
        require_positive("motor_mount.hole_clearance", self.hole_clearance)
    }
}

/// Flight-controller standoff post proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FcMountConfig {
    pub post_height: f64,
    pub post_radius: f64,
}

impl Default for FcMountConfig {
    fn default() -> Self {
        Self {
            post_height: FC_POST_HEIGHT,
            post_radius: FC_POST_RADIUS,
        }
    }
}

impl FcMountConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("fc_mount.post_height", self.post_height)?;
        require_positive("fc_mount.post_radius", self.post_radius)
    }
}

/// X-frame arm proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Radius of the hub end of each arm (mm).
    pub hub_radius: f64,
    /// Radius of the motor end of each arm (mm).
    pub tip_radius: f64,
    /// Projection of half the wheelbase onto each axis.
    pub diagonal_factor: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            hub_radius: FRAME_HUB_RADIUS,
            tip_radius: FRAME_TIP_RADIUS,
            diagonal_factor: DIAGONAL_FACTOR,
        }
    }
}

impl FrameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("frame.hub_radius", self.hub_radius)?;
        require_positive("frame.tip_radius", self.tip_radius)?;
        require_positive("frame.diagonal_factor", self.diagonal_factor)
    }

    /// Offset of a motor along each axis for the given wheelbase.
    ///
    /// # Examples
    /// ```
    /// use config::parts::FrameConfig;
    /// let offset = FrameConfig::default().motor_offset(200.0);
    /// assert!((offset - 70.710678).abs() < 1e-9);
    /// ```
    pub fn motor_offset(&self, wheelbase: f64) -> f64 {
        wheelbase / 2.0 * self.diagonal_factor
    }
}

/// Proportions of the visualization proxies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub motor_shaft_radius: f64,
    pub motor_shaft_height: f64,
    pub fc_board_thickness: f64,
    pub fc_hole_radius: f64,
    pub fc_usb_size: [f64; 3],
    pub prop_hub_diameter: f64,
    pub prop_hub_height: f64,
    /// Blade pitch in degrees. Zero gives flat blades.
    pub prop_pitch_degrees: f64,
    pub prop_chord_ratio: f64,
    pub prop_blade_thickness: f64,
    pub camera_depth_ratio: f64,
    pub camera_lens_ratio: f64,
    pub camera_lens_protrusion_ratio: f64,
    pub camera_lens_inset: f64,
    pub join_overlap: f64,
    pub battery_nub_length: f64,
    pub battery_nub_ratio: f64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            motor_shaft_radius: PROXY_MOTOR_SHAFT_RADIUS,
            motor_shaft_height: PROXY_MOTOR_SHAFT_HEIGHT,
            fc_board_thickness: PROXY_FC_BOARD_THICKNESS,
            fc_hole_radius: PROXY_FC_HOLE_RADIUS,
            fc_usb_size: PROXY_FC_USB_SIZE,
            prop_hub_diameter: PROXY_PROP_HUB_DIAMETER,
            prop_hub_height: PROXY_PROP_HUB_HEIGHT,
            prop_pitch_degrees: PROXY_PROP_PITCH_DEGREES,
            prop_chord_ratio: PROXY_PROP_CHORD_RATIO,
            prop_blade_thickness: PROXY_PROP_BLADE_THICKNESS,
            camera_depth_ratio: PROXY_CAMERA_DEPTH_RATIO,
            camera_lens_ratio: PROXY_CAMERA_LENS_RATIO,
            camera_lens_protrusion_ratio: PROXY_CAMERA_LENS_PROTRUSION_RATIO,
            camera_lens_inset: PROXY_CAMERA_LENS_INSET,
            join_overlap: PROXY_JOIN_OVERLAP,
            battery_nub_length: PROXY_BATTERY_NUB_LENGTH,
            battery_nub_ratio: PROXY_BATTERY_NUB_RATIO,
        }
    }
}

impl ProxyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("proxy.motor_shaft_radius", self.motor_shaft_radius)?;
        require_positive("proxy.motor_shaft_height", self.motor_shaft_height)?;
        require_positive("proxy.fc_board_thickness", self.fc_board_thickness)?;
        require_positive("proxy.fc_hole_radius", self.fc_hole_radius)?;
        for value in self.fc_usb_size {
            require_positive("proxy.fc_usb_size", value)?;
        }
        require_positive("proxy.prop_hub_diameter", self.prop_hub_diameter)?;
        require_positive("proxy.prop_hub_height", self.prop_hub_height)?;
        require_finite("proxy.prop_pitch_degrees", self.prop_pitch_degrees)?;
        require_positive("proxy.prop_chord_ratio", self.prop_chord_ratio)?;
        require_positive("proxy.prop_blade_thickness", self.prop_blade_thickness)?;
        require_positive("proxy.camera_depth_ratio", self.camera_depth_ratio)?;
        require_positive("proxy.camera_lens_ratio", self.camera_lens_ratio)?;
        require_positive(
            "proxy.camera_lens_protrusion_ratio",
            self.camera_lens_protrusion_ratio,
        )?;
        require_positive("proxy.camera_lens_inset", self.camera_lens_inset)?;
        require_positive("proxy.join_overlap", self.join_overlap)?;
        require_positive("proxy.battery_nub_length", self.battery_nub_length)?;
        require_positive("proxy.battery_nub_ratio", self.battery_nub_ratio)
    }
}

/// Where the viewer places each asset relative to the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub motor_height: f64,
    pub prop_lift: f64,
    pub stack_position: [f64; 3],
    pub camera_position: [f64; 3],
    pub battery_position: [f64; 3],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            motor_height: LAYOUT_MOTOR_HEIGHT,
            prop_lift: LAYOUT_PROP_LIFT,
            stack_position: LAYOUT_STACK_POSITION,
            camera_position: LAYOUT_CAMERA_POSITION,
            battery_position: LAYOUT_BATTERY_POSITION,
        }
    }
}

impl LayoutConfig {
    /// Positions may be negative; they only need to be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("layout.motor_height", self.motor_height),
            ("layout.prop_lift", self.prop_lift),
        ];
        let vectors = [
            ("layout.stack_position", self.stack_position),
            ("layout.camera_position", self.camera_position),
            ("layout.battery_position", self.battery_position),
        ];
        for (field, value) in scalars {
            require_finite(field, value)?;
        }
        for (field, position) in vectors {
            for value in position {
                require_finite(field, value)?;
            }
        }
        Ok(())
    }
}

/// Everything a part generator may read, bundled for one design.
///
/// # Examples
/// ```
/// use config::parts::DesignConfig;
/// let cfg = DesignConfig::from_json(r#"{ "resolution": { "structural": 120 } }"#).unwrap();
/// assert_eq!(cfg.resolution.structural, 120);
/// assert_eq!(cfg.resolution.decorative, 20);
/// assert_eq!(cfg.motor_mount.height, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    pub resolution: ResolutionPolicy,
    pub motor_mount: MotorMountConfig,
    pub fc_mount: FcMountConfig,
    pub frame: FrameConfig,
    pub proxy: ProxyConfig,
    pub layout: LayoutConfig,
}

impl DesignConfig {
    /// Parses a (possibly partial) JSON document and validates the result.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolution.validate()?;
        self.motor_mount.validate()?;
        self.fc_mount.validate()?;
        self.frame.validate()?;
        self.proxy.validate()?;
        self.layout.validate()
    }
}

#[cfg(test)]
mod tests;
