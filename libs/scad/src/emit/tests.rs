//! Tests for OpenSCAD emission.

use dronecad_csg::boolean::{difference, hull, union};
use dronecad_csg::primitives::{cube, cylinder};
use dronecad_csg::{ColorTag, GeometryError};

use super::*;

#[test]
fn test_primitive_lines() {
    let post = cylinder(5.0, 2.0, false, 20).unwrap();
    assert_eq!(
        emit(&post, Target::Fabrication).unwrap(),
        "cylinder(h=5, r=2, center=false, $fn=20);\n"
    );

    let body = cube([20.0, 16.0, 20.0], true).unwrap();
    assert_eq!(
        emit(&body, Target::Fabrication).unwrap(),
        "cube([20, 16, 20], center=true);\n"
    );
}

#[test]
fn test_difference_block() {
    let disc = cylinder(3.0, 11.0, false, 60).unwrap();
    let bore = cylinder(5.0, 2.5, true, 60).unwrap();
    let mount = difference(disc, [bore.at(0.0, 0.0, 1.5)]).unwrap();

    let expected = "\
difference() {
  cylinder(h=3, r=11, center=false, $fn=60);
  translate([0, 0, 1.5]) cylinder(h=5, r=2.5, center=true, $fn=60);
}
";
    assert_eq!(emit_solid(&mount, Target::Fabrication).unwrap(), expected);
}

#[test]
fn test_nested_blocks_indent() {
    let hub = cylinder(2.5, 10.0, false, 60).unwrap();
    let tip = cylinder(2.5, 5.0, false, 60).unwrap();
    let arm = hull([hub.placed(), tip.at(10.0, 10.0, 0.0)]).unwrap();
    let frame = union([arm]).unwrap();

    let expected = "\
union() {
  hull() {
    cylinder(h=2.5, r=10, center=false, $fn=60);
    translate([10, 10, 0]) cylinder(h=2.5, r=5, center=false, $fn=60);
  }
}
";
    assert_eq!(emit_solid(&frame, Target::Fabrication).unwrap(), expected);
}

#[test]
fn test_rotation_follows_translation_in_source() {
    let lens = cylinder(6.0, 5.0, false, 20).unwrap();
    let camera = union([lens.placed().rotated(-90.0, 0.0, 0.0).translated(0.0, 7.0, 0.0)]).unwrap();
    let source = emit_solid(&camera, Target::Fabrication).unwrap();
    assert!(source.contains("translate([0, 7, 0]) rotate([-90, 0, 0]) cylinder("));
}

#[test]
fn test_fabrication_refuses_color() {
    let proxy = cube([60.0, 12.0, 7.0], true)
        .unwrap()
        .colored(ColorTag::new("battery", [0.95, 0.8, 0.1, 1.0]));
    match emit(&proxy, Target::Fabrication) {
        Err(ExportError::ProxyNotFabricable { tags }) => assert_eq!(tags, vec!["battery"]),
        other => panic!("expected refusal, got {other:?}"),
    }
}

#[test]
fn test_preview_emits_color() {
    let proxy = cube([60.0, 12.0, 7.0], true)
        .unwrap()
        .colored(ColorTag::new("battery", [0.5, 0.25, 0.0, 1.0]));
    assert_eq!(
        emit(&proxy, Target::Preview).unwrap(),
        "color([0.5, 0.25, 0, 1]) cube([60, 12, 7], center=true);\n"
    );
}

#[test]
fn test_malformed_tree_is_rejected() {
    let empty = SolidNode::Difference { children: vec![] };
    assert!(matches!(
        emit(&empty, Target::Preview),
        Err(ExportError::Malformed(GeometryError::CompositionArity { .. }))
    ));

    let coarse = SolidNode::Cylinder {
        height: 1.0,
        radius: 1.0,
        center: false,
        segments: 2,
    };
    assert!(matches!(
        emit(&coarse, Target::Fabrication),
        Err(ExportError::Malformed(GeometryError::InvalidDimension { .. }))
    ));
}
