//! # Part Requests
//!
//! Serializable description of one part to build, so non-Rust callers can
//! ask for parts by name:
//!
//! ```json
//! { "part": "motor_mount", "bolt_spacing": 16.0, "shaft_hole": 5.0 }
//! ```

use config::constants::DEFAULT_BOLT_HOLE_DIAMETER;
use config::DesignConfig;
use dronecad_csg::{GeometryError, Solid};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::error::RequestError;
use crate::fc_mount::fc_mount;
use crate::frame::frame_body;
use crate::frame_kit::{frame_kit, FrameKitSpec};
use crate::motor_mount::motor_mount;
use crate::proxy::{proxy_battery, proxy_camera, proxy_fc, proxy_motor, proxy_prop};

fn default_bolt_hole() -> f64 {
    DEFAULT_BOLT_HOLE_DIAMETER
}

/// A part and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "part", rename_all = "snake_case")]
pub enum PartRequest {
    MotorMount {
        bolt_spacing: f64,
        shaft_hole: f64,
        #[serde(default = "default_bolt_hole")]
        bolt_hole_size: f64,
    },
    FcMount {
        spacing: f64,
    },
    FrameBody {
        wheelbase: f64,
        arm_thickness: f64,
    },
    FrameKit(FrameKitSpec),
    ProxyMotor {
        stator_diam: f64,
        height: f64,
    },
    ProxyFc {
        mounting: f64,
        size: f64,
    },
    ProxyProp {
        diameter_mm: f64,
    },
    ProxyCamera {
        width_mm: f64,
    },
    ProxyBattery {
        length: f64,
        width: f64,
        height: f64,
    },
}

impl PartRequest {
    /// Parses a single request document.
    pub fn from_json(source: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Wire name of the part.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MotorMount { .. } => "motor_mount",
            Self::FcMount { .. } => "fc_mount",
            Self::FrameBody { .. } => "frame_body",
            Self::FrameKit(_) => "frame_kit",
            Self::ProxyMotor { .. } => "proxy_motor",
            Self::ProxyFc { .. } => "proxy_fc",
            Self::ProxyProp { .. } => "proxy_prop",
            Self::ProxyCamera { .. } => "proxy_camera",
            Self::ProxyBattery { .. } => "proxy_battery",
        }
    }

    /// Proxies are for the viewer only and cannot be exported for
    /// fabrication.
    pub fn is_proxy(&self) -> bool {
        matches!(
            self,
            Self::ProxyMotor { .. }
                | Self::ProxyFc { .. }
                | Self::ProxyProp { .. }
                | Self::ProxyCamera { .. }
                | Self::ProxyBattery { .. }
        )
    }

    /// Builds the part.
    pub fn generate(&self, config: &DesignConfig) -> Result<Solid, GeometryError> {
        debug!(part = self.name(), "generating part");
        match *self {
            Self::MotorMount {
                bolt_spacing,
                shaft_hole,
                bolt_hole_size,
            } => motor_mount(bolt_spacing, shaft_hole, bolt_hole_size, config),
            Self::FcMount { spacing } => fc_mount(spacing, config),
            Self::FrameBody {
                wheelbase,
                arm_thickness,
            } => frame_body(wheelbase, arm_thickness, config),
            Self::FrameKit(ref spec) => frame_kit(spec, config),
            Self::ProxyMotor {
                stator_diam,
                height,
            } => proxy_motor(stator_diam, height, config),
            Self::ProxyFc { mounting, size } => proxy_fc(mounting, size, config),
            Self::ProxyProp { diameter_mm } => proxy_prop(diameter_mm, config),
            Self::ProxyCamera { width_mm } => proxy_camera(width_mm, config),
            Self::ProxyBattery {
                length,
                width,
                height,
            } => proxy_battery(length, width, height, config),
        }
    }
}

/// Builds every request in parallel. Results keep the request order and a
/// failing request does not affect the others.
pub fn generate_batch(
    requests: &[PartRequest],
    config: &DesignConfig,
) -> Vec<Result<Solid, GeometryError>> {
    let _span = info_span!("generate_batch", count = requests.len()).entered();
    requests
        .par_iter()
        .map(|request| request.generate(config))
        .collect()
}

/// Parses a request and optional config overrides, then builds the part.
///
/// # Example
///
/// ```rust
/// use dronecad_parts::request::generate_json;
///
/// let solid = generate_json(r#"{ "part": "fc_mount", "spacing": 30.5 }"#, None).unwrap();
/// assert_eq!(solid.root.children().len(), 4);
///
/// let coarse = r#"{ "resolution": { "decorative": 2 } }"#;
/// assert!(generate_json(r#"{ "part": "fc_mount", "spacing": 30.5 }"#, Some(coarse)).is_err());
/// ```
pub fn generate_json(request: &str, overrides: Option<&str>) -> Result<Solid, RequestError> {
    let request = PartRequest::from_json(request)?;
    let config = match overrides {
        Some(source) => DesignConfig::from_json(source)?,
        None => DesignConfig::default(),
    };
    Ok(request.generate(&config)?)
}
