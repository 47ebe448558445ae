//! # dronecad Parts
//!
//! Named, parametric generators for small-drone hardware. Every generator is
//! a pure function of its headline dimensions and a [`DesignConfig`], and
//! returns one finished [`Solid`].
//!
//! ## Architecture
//!
//! ```text
//! DesignConfig ─┐
//!               ├→ motor_mount / fc_mount / frame_body → frame_kit   (fabrication)
//! dimensions ───┘
//!               └→ proxy::{motor, fc, prop, camera, battery}         (viewer only)
//!
//! DroneSpec → generate_assets → AssetSet + assembly_layout
//! PartRequest → generate / generate_batch
//! ```
//!
//! ## Example
//!
//! ```rust
//! use config::DesignConfig;
//! use dronecad_parts::motor_mount;
//!
//! let mount = motor_mount(16.0, 5.0, 2.2, &DesignConfig::default()).unwrap();
//! assert!(mount.root.is_manufacturable());
//! assert!(!mount.is_degenerate());
//! ```
//!
//! [`DesignConfig`]: config::DesignConfig
//! [`Solid`]: dronecad_csg::Solid

pub mod assets;
pub mod error;
pub mod fastener;
pub mod fc_mount;
pub mod frame;
pub mod frame_kit;
pub mod layout;
pub mod motor_mount;
pub mod proxy;
pub mod request;

pub use assets::{generate_assets, AssetSet, DroneSpec};
pub use error::RequestError;
pub use fastener::{bolt_hole_diameter, wheelbase_for_prop, ScrewClass};
pub use fc_mount::fc_mount;
pub use frame::frame_body;
pub use frame_kit::{frame_kit, FrameKitSpec};
pub use layout::{assembly_layout, AssetKind, Placement};
pub use motor_mount::motor_mount;
pub use proxy::{proxy_battery, proxy_camera, proxy_fc, proxy_motor, proxy_prop};
pub use request::{generate_batch, PartRequest};
