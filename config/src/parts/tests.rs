//! Tests for the part configuration structs.

use super::*;

/// Defaults pass validation and carry the documented values.
#[test]
fn default_config_is_valid() {
    let cfg = DesignConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.motor_mount.rim_margin, 3.0);
    assert_eq!(cfg.fc_mount.post_height, 5.0);
    assert_eq!(cfg.frame.diagonal_factor, 0.70710678);
}

#[test]
fn empty_document_yields_defaults() {
    let cfg = DesignConfig::from_json("{}").unwrap();
    assert_eq!(cfg, DesignConfig::default());
}

#[test]
fn partial_override_keeps_other_fields() {
    let cfg = DesignConfig::from_json(r#"{ "frame": { "hub_radius": 12.5 } }"#).unwrap();
    assert_eq!(cfg.frame.hub_radius, 12.5);
    assert_eq!(cfg.frame.tip_radius, FRAME_TIP_RADIUS);
    assert_eq!(cfg.proxy, ProxyConfig::default());
}

#[test]
fn non_positive_override_is_rejected() {
    let err = DesignConfig::from_json(r#"{ "fc_mount": { "post_radius": 0.0 } }"#).unwrap_err();
    assert_eq!(
        err,
        ConfigError::NonPositive {
            field: "fc_mount.post_radius",
            value: 0.0
        }
    );
}

#[test]
fn bad_segments_override_is_rejected() {
    let err = DesignConfig::from_json(r#"{ "resolution": { "decorative": 2 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSegments { .. }));
}

#[test]
fn malformed_document_is_parse_error() {
    let err = DesignConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn motor_offset_uses_diagonal_factor() {
    let frame = FrameConfig::default();
    let offset = frame.motor_offset(250.0);
    assert!((offset - 125.0 * DIAGONAL_FACTOR).abs() < 1e-12);
}

#[test]
fn layout_rejects_non_finite_positions() {
    let layout = LayoutConfig::default();
    assert_eq!(layout.camera_position, [0.0, 35.0, 10.0]);
    assert_eq!(layout.battery_position[2], -20.0);
    assert!(layout.validate().is_ok());

    let bad = LayoutConfig {
        prop_lift: f64::INFINITY,
        ..layout
    };
    assert!(matches!(
        bad.validate(),
        Err(ConfigError::NonFinite {
            field: "layout.prop_lift",
            ..
        })
    ));
}
