use config::{DesignConfig, Quality};
use dronecad_csg::boolean::union;
use dronecad_csg::error::require_positive;
use dronecad_csg::primitives::cylinder;
use dronecad_csg::{GeometryError, Solid};
use tracing::debug;

use super::Material;

/// Brushless motor: bell/stator body with the shaft sticking out on top.
///
/// The body rests on z=0; the shaft starts `join_overlap` below its top face.
pub fn proxy_motor(
    stator_diam: f64,
    height: f64,
    config: &DesignConfig,
) -> Result<Solid, GeometryError> {
    debug!(stator_diam, height, "building motor proxy");

    require_positive("stator_diam", stator_diam)?;
    require_positive("height", height)?;

    let proxy = &config.proxy;
    let segments = config.resolution.segments(Quality::Decorative);

    let body = cylinder(height, stator_diam / 2.0, false, segments)?.colored(Material::Motor.tag());
    let shaft = cylinder(
        proxy.motor_shaft_height + proxy.join_overlap,
        proxy.motor_shaft_radius,
        false,
        segments,
    )?
    .colored(Material::Metal.tag());

    union([body.placed(), shaft.at(0.0, 0.0, height - proxy.join_overlap)])
}
