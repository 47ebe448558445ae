//! Tests for asset-set generation.

use super::*;

#[test]
fn test_default_spec_matches_reference_build() {
    let spec = DroneSpec::default();
    assert_eq!(spec.motor_mounting_mm, 6.6);
    assert_eq!(spec.prop_diameter_mm, 31.0);
    assert_eq!(spec.fc_mounting_mm, 25.5);
    assert_eq!(spec.camera_width_mm, 14.0);
    assert!(!spec.use_inserts);
    assert_eq!(spec.battery_mm, [60.0, 12.0, 7.0]);
    assert_eq!(spec.wheelbase(), 77.0);
}

#[test]
fn test_kit_uses_fastener_heuristic() {
    let spec = DroneSpec {
        motor_mounting_mm: 16.0,
        use_inserts: true,
        ..DroneSpec::default()
    };
    let kit = spec.frame_kit();
    assert_eq!(kit.bolt_hole_size, 4.0);
    assert_eq!(kit.shaft_hole, 2.0);
    assert_eq!(kit.arm_thickness, 2.5);
}

#[test]
fn test_partial_spec_from_json() {
    let spec: DroneSpec = serde_json::from_str(r#"{ "prop_diameter_mm": 51.0 }"#).unwrap();
    assert_eq!(spec.wheelbase(), 117.0);
    assert_eq!(spec.fc_mounting_mm, 25.5);
}

#[test]
fn test_generate_assets_is_deterministic() {
    let spec = DroneSpec::default();
    let cfg = DesignConfig::default();
    let first = generate_assets(&spec, &cfg).unwrap();
    let second = generate_assets(&spec, &cfg).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_only_frame_is_manufacturable() {
    let assets = generate_assets(&DroneSpec::default(), &DesignConfig::default()).unwrap();
    for kind in AssetKind::ALL {
        let solid = assets.solid(kind);
        assert_eq!(solid.root.is_manufacturable(), kind == AssetKind::Frame, "{kind:?}");
    }
}

#[test]
fn test_every_layout_entry_has_a_solid() {
    let assets = generate_assets(&DroneSpec::default(), &DesignConfig::default()).unwrap();
    assert_eq!(assets.layout.len(), 12);
    for placement in &assets.layout {
        assert!(assets.solid(placement.asset).root.node_count() > 0);
    }
}

#[test]
fn test_bad_part_fails_set() {
    let spec = DroneSpec {
        prop_diameter_mm: 4.0,
        ..DroneSpec::default()
    };
    assert!(matches!(
        generate_assets(&spec, &DesignConfig::default()),
        Err(GeometryError::InvalidDimension {
            name: "blade_length",
            ..
        })
    ));
}
