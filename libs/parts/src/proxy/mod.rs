//! # Visualization Proxies
//!
//! Stand-ins for bought components (motors, flight controller, props, camera,
//! battery) so a viewer can check fit and clearance around the printed parts.
//! Every proxy carries [`ColorTag`]s and is refused by the fabrication export
//! path.
//!
//! All proxies use the decorative resolution.
//!
//! [`ColorTag`]: dronecad_csg::ColorTag

mod battery;
mod camera;
mod fc;
mod motor;
mod prop;

pub use battery::proxy_battery;
pub use camera::proxy_camera;
pub use fc::proxy_fc;
pub use motor::proxy_motor;
pub use prop::{prop_blade_length, proxy_prop};

use config::constants::{
    BATTERY_COLOR, CAMERA_COLOR, CONNECTOR_COLOR, LENS_COLOR, METAL_COLOR, MOTOR_COLOR, PCB_COLOR,
    PROP_COLOR,
};
use dronecad_csg::ColorTag;

/// Viewer materials used by the proxies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Motor,
    Metal,
    Pcb,
    Prop,
    Camera,
    Lens,
    Battery,
    Connector,
}

impl Material {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Motor => "motor",
            Self::Metal => "metal",
            Self::Pcb => "pcb",
            Self::Prop => "prop",
            Self::Camera => "camera",
            Self::Lens => "lens",
            Self::Battery => "battery",
            Self::Connector => "connector",
        }
    }

    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Self::Motor => MOTOR_COLOR,
            Self::Metal => METAL_COLOR,
            Self::Pcb => PCB_COLOR,
            Self::Prop => PROP_COLOR,
            Self::Camera => CAMERA_COLOR,
            Self::Lens => LENS_COLOR,
            Self::Battery => BATTERY_COLOR,
            Self::Connector => CONNECTOR_COLOR,
        }
    }

    pub fn tag(&self) -> ColorTag {
        ColorTag::new(self.name(), self.rgba())
    }
}
