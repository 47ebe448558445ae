use config::{DesignConfig, Quality};
use dronecad_csg::boolean::{difference, union};
use dronecad_csg::error::require_positive;
use dronecad_csg::primitives::{cube, cylinder};
use dronecad_csg::{GeometryError, Solid};
use tracing::debug;

use super::Material;
use crate::fc_mount::CORNERS;

/// Flight controller board: square PCB drilled on its mounting pattern, with
/// a USB connector on the +X edge.
///
/// The board lies on z=0. A `mounting` larger than `size` puts the holes off
/// the board, which shows up as a disjoint-subtractor diagnostic.
pub fn proxy_fc(mounting: f64, size: f64, config: &DesignConfig) -> Result<Solid, GeometryError> {
    debug!(mounting, size, "building fc proxy");

    require_positive("mounting", mounting)?;
    require_positive("size", size)?;

    let proxy = &config.proxy;
    let thickness = proxy.fc_board_thickness;
    let segments = config.resolution.segments(Quality::Decorative);

    let plate = cube([size, size, thickness], true)?;
    // Three board thicknesses, centered on the board, always cuts through.
    let hole = cylinder(3.0 * thickness, proxy.fc_hole_radius, true, segments)?;
    let half = mounting / 2.0;
    let board = difference(
        plate.at(0.0, 0.0, thickness / 2.0),
        CORNERS
            .iter()
            .map(|&(sx, sy)| hole.clone().at(sx * half, sy * half, thickness / 2.0)),
    )?
    .colored(Material::Pcb.tag());

    let [usb_x, usb_y, usb_z] = proxy.fc_usb_size;
    let usb = cube([usb_x, usb_y, usb_z], true)?.colored(Material::Metal.tag());

    union([
        board.root.placed(),
        usb.at(
            (size - usb_x) / 2.0,
            0.0,
            thickness + usb_z / 2.0 - proxy.join_overlap,
        ),
    ])
}
