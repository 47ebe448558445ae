//! # dronecad SCAD
//!
//! Export of solid trees to the tools that turn them into meshes and
//! pictures.
//!
//! ## Architecture
//!
//! ```text
//! SolidNode → validate_tree → emit(Target) → OpenSCAD source → mesh compiler
//!           └→ to_json → viewer / other consumers
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dronecad_csg::primitives::cylinder;
//! use dronecad_scad::{emit, Target};
//!
//! let post = cylinder(5.0, 2.0, false, 20).unwrap();
//! let source = emit(&post, Target::Fabrication).unwrap();
//! assert!(source.contains("cylinder(h=5, r=2, center=false, $fn=20);"));
//! ```

pub mod emit;
pub mod error;
pub mod json;

pub use emit::{emit, emit_solid, Target};
pub use error::ExportError;
pub use json::{from_json, to_json};
