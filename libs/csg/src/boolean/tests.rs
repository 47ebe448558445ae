//! Tests for the boolean composition layer.

use super::*;
use crate::diagnostic::Degeneracy;
use crate::primitives::{cube, cylinder};

fn disc() -> SolidNode {
    cylinder(3.0, 10.0, false, 60).unwrap()
}

#[test]
fn union_requires_a_child() {
    let err = union(Vec::<Placed>::new()).unwrap_err();
    assert_eq!(
        err,
        GeometryError::CompositionArity {
            operation: BooleanOp::Union,
            required: 1,
            actual: 0
        }
    );
}

#[test]
fn hull_requires_a_child() {
    let err = hull(Vec::<Placed>::new()).unwrap_err();
    assert!(matches!(
        err,
        GeometryError::CompositionArity {
            operation: BooleanOp::Hull,
            ..
        }
    ));
}

#[test]
fn difference_of_requires_a_base() {
    let err = difference_of(Vec::<Placed>::new()).unwrap_err();
    assert!(matches!(
        err,
        GeometryError::CompositionArity {
            operation: BooleanOp::Difference,
            ..
        }
    ));
}

#[test]
fn single_child_hull_is_clean() {
    let solid = hull([disc()]).unwrap();
    assert!(solid.diagnostics.is_empty());
    assert_eq!(solid.root.children()[0].node, disc());
}

#[test]
fn difference_without_subtractors_is_base_only() {
    let solid = difference(disc(), Vec::<Placed>::new()).unwrap();
    assert_eq!(solid.root.children().len(), 1);
    assert!(solid.diagnostics.is_empty());
}

#[test]
fn difference_keeps_order() {
    let a = cylinder(5.0, 1.0, true, 60).unwrap().at(5.0, 0.0, 1.5);
    let b = cylinder(5.0, 1.0, true, 60).unwrap().at(-5.0, 0.0, 1.5);
    let solid = difference(disc(), [a.clone(), b.clone()]).unwrap();
    assert_eq!(solid.root.children()[1], a);
    assert_eq!(solid.root.children()[2], b);
    assert!(!solid.is_degenerate());
}

#[test]
fn disjoint_subtractor_is_reported_not_fatal() {
    let far = cube([2.0, 2.0, 2.0], true).unwrap().at(100.0, 0.0, 0.0);
    let solid = difference(disc(), [far]).unwrap();
    assert!(solid.is_degenerate());
    assert_eq!(
        solid.diagnostics[0].degeneracy(),
        Some(Degeneracy::DisjointSubtractor { index: 1 })
    );
}

#[test]
fn touching_subtractor_counts_as_disjoint() {
    // Sits exactly on top of the 3mm disc.
    let lid = cylinder(1.0, 5.0, false, 60).unwrap().at(0.0, 0.0, 3.0);
    let solid = difference(disc(), [lid]).unwrap();
    assert_eq!(
        solid.diagnostics[0].degeneracy(),
        Some(Degeneracy::DisjointSubtractor { index: 1 })
    );
}

#[test]
fn coincident_hull_is_reported() {
    let solid = hull([disc().at(1.0, 1.0, 0.0), disc().at(1.0, 1.0, 0.0)]).unwrap();
    assert_eq!(
        solid.diagnostics[0].degeneracy(),
        Some(Degeneracy::CoincidentHull)
    );
}

#[test]
fn op_names_match_openscad() {
    assert_eq!(BooleanOp::Union.to_string(), "union");
    assert_eq!(BooleanOp::Difference.name(), "difference");
    assert_eq!(BooleanOp::Hull.name(), "hull");
}
