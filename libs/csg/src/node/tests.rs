//! Tests for the solid tree types.

use super::*;
use crate::boolean::{difference, union};
use crate::primitives::{cube, cylinder};

fn post() -> SolidNode {
    cylinder(5.0, 2.0, false, 20).unwrap()
}

#[test]
fn colored_node_is_not_manufacturable() {
    let plain = post();
    assert!(plain.is_manufacturable());

    let tagged = post().colored(ColorTag::new("metal", [0.7, 0.7, 0.7, 1.0]));
    assert!(!tagged.is_manufacturable());
    assert_eq!(tagged.color_tags().len(), 1);
    assert_eq!(tagged.color_tags()[0].name, "metal");
}

#[test]
fn color_tags_found_below_composites() {
    let tree = union([
        post().colored(ColorTag::new("a", [1.0, 0.0, 0.0, 1.0])).placed(),
        post().at(10.0, 0.0, 0.0),
        post().colored(ColorTag::new("b", [0.0, 1.0, 0.0, 1.0])).at(20.0, 0.0, 0.0),
    ])
    .unwrap();
    let names: Vec<&str> = tree.root.color_tags().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn node_count_includes_wrappers() {
    let tree = union([post().placed(), post().at(5.0, 0.0, 0.0)]).unwrap();
    assert_eq!(tree.root.node_count(), 3);
    assert_eq!(
        tree.root
            .colored(ColorTag::new("x", [0.0; 4]))
            .node_count(),
        4
    );
}

#[test]
fn placed_keeps_rotation_and_translation_apart() {
    let placed = post().placed().rotated(10.0, 0.0, 90.0).translated(1.0, 2.0, 3.0);
    assert_eq!(placed.transform.rotation, DVec3::new(10.0, 0.0, 90.0));
    assert_eq!(placed.transform.translation, DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(placed.node, post());
}

#[test]
fn children_and_operation_accessors() {
    let plate = cube([10.0, 10.0, 2.0], true).unwrap();
    let solid = difference(plate, [post().placed()]).unwrap();
    assert_eq!(solid.root.operation(), Some(BooleanOp::Difference));
    assert_eq!(solid.root.children().len(), 2);
    assert!(post().children().is_empty());
    assert_eq!(post().operation(), None);
}

#[test]
fn solid_into_placed_keeps_root() {
    let solid = union([post()]).unwrap();
    let root = solid.root.clone();
    let placed: Placed = solid.into();
    assert_eq!(placed.node, root);
    assert!(placed.transform.is_identity());
}

#[test]
fn tree_serializes_with_kind_tags() {
    let tree = union([post().at(1.0, 0.0, 0.0)]).unwrap();
    let json = serde_json::to_string(&tree.root).unwrap();
    assert!(json.contains(r#""kind":"union""#));
    assert!(json.contains(r#""kind":"cylinder""#));
    let back: SolidNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree.root);
}
