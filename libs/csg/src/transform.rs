//! # Placement Transforms
//!
//! A [`Transform`] positions a child inside its parent composite. It is
//! stored next to the child and never alters the child itself.
//!
//! Rotation is applied first (degrees about X, then Y, then Z, matching
//! OpenSCAD's `rotate([x, y, z])`), then translation.

use glam::{DMat4, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Rigid placement of a child node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    /// Offset in millimeters.
    pub translation: DVec3,
    /// Rotation angles in degrees about X, Y and Z.
    pub rotation: DVec3,
}

impl Transform {
    /// No rotation, no offset.
    pub const IDENTITY: Self = Self {
        translation: DVec3::ZERO,
        rotation: DVec3::ZERO,
    };

    /// Pure translation.
    ///
    /// ```rust
    /// use dronecad_csg::Transform;
    /// use glam::DVec3;
    ///
    /// let t = Transform::translate(1.0, 2.0, 3.0);
    /// assert_eq!(t.apply(DVec3::ZERO), DVec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn translate(x: f64, y: f64, z: f64) -> Self {
        Self {
            translation: DVec3::new(x, y, z),
            rotation: DVec3::ZERO,
        }
    }

    /// Pure rotation, angles in degrees.
    pub fn rotate(x: f64, y: f64, z: f64) -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DVec3::new(x, y, z),
        }
    }

    /// Replaces the translation, keeping the rotation.
    pub fn with_translation(mut self, x: f64, y: f64, z: f64) -> Self {
        self.translation = DVec3::new(x, y, z);
        self
    }

    pub fn is_identity(&self) -> bool {
        self.translation == DVec3::ZERO && self.rotation == DVec3::ZERO
    }

    pub fn has_rotation(&self) -> bool {
        self.rotation != DVec3::ZERO
    }

    /// Homogeneous matrix equivalent to `translate(t) rotate(r)`.
    pub fn matrix(&self) -> DMat4 {
        let rotation = DMat4::from_euler(
            EulerRot::ZYX,
            self.rotation.z.to_radians(),
            self.rotation.y.to_radians(),
            self.rotation.x.to_radians(),
        );
        DMat4::from_translation(self.translation) * rotation
    }

    /// Maps a point from child space into parent space.
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.matrix().transform_point3(point)
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.rotation.is_finite()
    }
}

// =============================================================================
// TESTS
// =============================================================================
