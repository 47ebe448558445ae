//! # dronecad CSG
//!
//! Immutable constructive-solid-geometry trees for the part generators.
//!
//! ## Architecture
//!
//! ```text
//! primitives (cylinder, cube) → boolean (union, difference, hull) → Solid
//!                                                   ↓
//!                                  analysis (diagnostics, validation)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dronecad_csg::{boolean, primitives};
//!
//! let hub = primitives::cylinder(2.5, 10.0, false, 60).unwrap();
//! let tip = primitives::cylinder(2.5, 5.0, false, 60).unwrap();
//! let arm = boolean::hull([hub.placed(), tip.at(80.0, 80.0, 0.0)]).unwrap();
//! assert!(arm.diagnostics.is_empty());
//! assert!(arm.root.is_manufacturable());
//! ```

pub mod analysis;
pub mod boolean;
pub mod bounds;
pub mod diagnostic;
pub mod error;
pub mod node;
pub mod primitives;
pub mod transform;

// Re-export public API
pub use boolean::BooleanOp;
pub use bounds::Aabb;
pub use diagnostic::{Degeneracy, Diagnostic, DiagnosticKind};
pub use error::GeometryError;
pub use node::{ColorTag, Placed, Solid, SolidNode};
pub use transform::Transform;
