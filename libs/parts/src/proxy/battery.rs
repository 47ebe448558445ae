use config::DesignConfig;
use dronecad_csg::boolean::union;
use dronecad_csg::error::require_positive;
use dronecad_csg::primitives::cube;
use dronecad_csg::{GeometryError, Solid};
use tracing::debug;

use super::Material;

/// LiPo pack with its lead connector on the +X end. Centered on the origin.
pub fn proxy_battery(
    length: f64,
    width: f64,
    height: f64,
    config: &DesignConfig,
) -> Result<Solid, GeometryError> {
    debug!(length, width, height, "building battery proxy");

    require_positive("length", length)?;
    require_positive("width", width)?;
    require_positive("height", height)?;

    let proxy = &config.proxy;
    let pack = cube([length, width, height], true)?.colored(Material::Battery.tag());

    let nub_length = proxy.battery_nub_length + proxy.join_overlap;
    let nub = cube(
        [
            nub_length,
            width * proxy.battery_nub_ratio,
            height * proxy.battery_nub_ratio,
        ],
        true,
    )?
    .colored(Material::Connector.tag());

    union([
        pack.placed(),
        nub.at((length + proxy.battery_nub_length - proxy.join_overlap) / 2.0, 0.0, 0.0),
    ])
}
