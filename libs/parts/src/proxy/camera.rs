use config::{DesignConfig, Quality};
use dronecad_csg::boolean::union;
use dronecad_csg::error::require_positive;
use dronecad_csg::primitives::{cube, cylinder};
use dronecad_csg::{GeometryError, Solid};
use tracing::debug;

use super::Material;

/// FPV camera: square-faced body looking down +Y with a lens barrel.
///
/// The body is centered on the origin. The barrel starts `camera_lens_inset`
/// behind the front face and sticks out `camera_lens_protrusion_ratio × w`.
pub fn proxy_camera(width_mm: f64, config: &DesignConfig) -> Result<Solid, GeometryError> {
    debug!(width_mm, "building camera proxy");

    require_positive("width_mm", width_mm)?;

    let proxy = &config.proxy;
    let depth = width_mm * proxy.camera_depth_ratio;
    let body = cube([width_mm, depth, width_mm], true)?.colored(Material::Camera.tag());

    let barrel = cylinder(
        proxy.camera_lens_inset + width_mm * proxy.camera_lens_protrusion_ratio,
        width_mm * proxy.camera_lens_ratio,
        false,
        config.resolution.segments(Quality::Decorative),
    )?
    .colored(Material::Lens.tag());

    // -90° about X turns the barrel's +Z axis onto +Y.
    union([
        body.placed(),
        barrel
            .placed()
            .rotated(-90.0, 0.0, 0.0)
            .translated(0.0, depth / 2.0 - proxy.camera_lens_inset, 0.0),
    ])
}
