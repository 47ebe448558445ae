use config::{DesignConfig, ProxyConfig, Quality};
use dronecad_csg::boolean::union;
use dronecad_csg::error::require_positive;
use dronecad_csg::primitives::{cube, cylinder};
use dronecad_csg::{GeometryError, Placed, Solid};
use tracing::debug;

use super::Material;

/// Length of each blade from hub edge to tip.
///
/// Fails with `InvalidDimension` when the prop is no wider than its hub.
pub fn prop_blade_length(diameter_mm: f64, proxy: &ProxyConfig) -> Result<f64, GeometryError> {
    require_positive("diameter_mm", diameter_mm)?;
    let length = (diameter_mm - proxy.prop_hub_diameter) / 2.0;
    if length <= 0.0 {
        return Err(GeometryError::invalid_dimension(
            "blade_length",
            length,
            "prop diameter must exceed the hub diameter",
        ));
    }
    Ok(length)
}

/// Two-blade prop: hub plus two pitched blades 180° apart.
///
/// # Example
///
/// ```rust
/// use config::DesignConfig;
/// use dronecad_parts::proxy_prop;
///
/// let cfg = DesignConfig::default();
/// assert!(proxy_prop(31.0, &cfg).is_ok());
/// assert!(proxy_prop(5.0, &cfg).is_err());
/// ```
pub fn proxy_prop(diameter_mm: f64, config: &DesignConfig) -> Result<Solid, GeometryError> {
    debug!(diameter_mm, "building prop proxy");

    let proxy = &config.proxy;
    let blade_length = prop_blade_length(diameter_mm, proxy)?;
    let hub_radius = proxy.prop_hub_diameter / 2.0;

    let hub = cylinder(
        proxy.prop_hub_height,
        hub_radius,
        false,
        config.resolution.segments(Quality::Decorative),
    )?;
    let blade = cube(
        [
            blade_length,
            diameter_mm * proxy.prop_chord_ratio,
            proxy.prop_blade_thickness,
        ],
        true,
    )?;

    // Blade centers sit half a blade out from the hub edge, on +X and -X.
    let reach = hub_radius + blade_length / 2.0;
    let mut parts: Vec<Placed> = vec![hub.placed()];
    for (sign, heading) in [(1.0, 0.0), (-1.0, 180.0)] {
        parts.push(
            blade
                .clone()
                .placed()
                .rotated(proxy.prop_pitch_degrees, 0.0, heading)
                .translated(sign * reach, 0.0, proxy.prop_hub_height / 2.0),
        );
    }

    Ok(union(parts)?.colored(Material::Prop.tag()))
}
