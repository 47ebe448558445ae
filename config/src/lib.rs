//! # Config Crate
//!
//! Centralized defaults for the drone part generators. Every dimension that
//! a part module would otherwise hardcode lives here under a name, and every
//! one of them can be overridden per design.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MOTOR_MOUNT_RIM_MARGIN, STRUCTURAL_SEGMENTS};
//! use config::parts::DesignConfig;
//! use config::resolution::Quality;
//!
//! let cfg = DesignConfig::default();
//! assert_eq!(cfg.motor_mount.rim_margin, MOTOR_MOUNT_RIM_MARGIN);
//! assert_eq!(cfg.resolution.segments(Quality::Structural), STRUCTURAL_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Overridable**: Part modules read config structs, never raw constants
//! - **Compatible Defaults**: `Default` reproduces the historical outputs

pub mod constants;
pub mod error;
pub mod parts;
pub mod resolution;

pub use error::ConfigError;
pub use parts::{
    DesignConfig, FcMountConfig, FrameConfig, LayoutConfig, MotorMountConfig, ProxyConfig,
};
pub use resolution::{Quality, ResolutionPolicy};
