//! Integration tests for primitive and boolean composition.

use dronecad_csg::boolean::{difference, hull, union};
use dronecad_csg::primitives::{cube, cylinder};
use dronecad_csg::{Degeneracy, DiagnosticKind, GeometryError, Placed, SolidNode};

/// A cutter larger than its base leaves nothing, which is reported but not
/// fatal.
#[test]
fn oversized_cutter_is_degenerate_not_error() {
    let base = cylinder(3.0, 10.0, false, 60).unwrap();
    let cutter = cylinder(5.0, 20.0, false, 60).unwrap();

    let solid = difference(base, [cutter]).expect("degenerate geometry is not an error");

    assert!(solid.is_degenerate());
    assert_eq!(solid.diagnostics.len(), 1);
    assert_eq!(
        solid.diagnostics[0].kind,
        DiagnosticKind::GeometryDegenerate(Degeneracy::FullySubtracted { index: 1 })
    );
}

#[test]
fn subtraction_order_does_not_change_diagnostics() {
    let plate = cube([30.0, 30.0, 2.0], true).unwrap();
    let hole = |x: f64| cylinder(4.0, 1.5, true, 20).unwrap().at(x, 0.0, 0.0);

    let forward = difference(plate.clone(), [hole(-10.0), hole(10.0)]).unwrap();
    let reverse = difference(plate, [hole(10.0), hole(-10.0)]).unwrap();

    assert!(forward.diagnostics.is_empty());
    assert!(reverse.diagnostics.is_empty());
}

#[test]
fn same_inputs_build_equal_trees() {
    let build = || {
        let hub = cylinder(2.5, 10.0, false, 60).unwrap();
        let tip = cylinder(2.5, 5.0, false, 60).unwrap();
        union([hull([hub.placed(), tip.at(40.0, 40.0, 0.0)]).unwrap()]).unwrap()
    };
    assert_eq!(build(), build());
}

#[test]
fn nested_composites_report_nested_paths() {
    let inner = difference(
        cube([2.0, 2.0, 2.0], true).unwrap(),
        [cube([1.0, 1.0, 1.0], true).unwrap().at(0.0, 0.0, 50.0)],
    )
    .unwrap();
    let middle = union([cube([1.0, 1.0, 1.0], true).unwrap().placed(), Placed::from(inner)]).unwrap();
    let outer = hull([middle]).unwrap();

    assert_eq!(outer.diagnostics.len(), 1);
    assert_eq!(outer.diagnostics[0].path, vec![0, 1]);
}

#[test]
fn invalid_primitive_aborts_composition() {
    let result: Result<SolidNode, GeometryError> = cylinder(0.0, 1.0, false, 60);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("height"));
}
