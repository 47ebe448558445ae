//! # Configuration Constants
//!
//! Named defaults for every dimension the part generators would otherwise
//! hardcode. Part modules never read these directly; they go through the
//! config structs in [`crate::parts`] so callers can override any of them.
//!
//! ## Categories
//!
//! - **Precision**: Contact tolerance for the geometry analysis
//! - **Resolution**: Segment counts for circular primitives
//! - **Manufacturable parts**: Motor mount, FC mount, frame body
//! - **Proxies**: Proportions and colors of visualization stand-ins

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Gap (mm) below which two solids are treated as touching.
///
/// Compared against coordinates that went through rotation matrices, so it
/// is well above f64 round-off.
pub const CONTACT_TOLERANCE: f64 = 1e-6;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Segment count for structural bores (shaft and bolt holes).
///
/// High enough that the polygonal bore stays within fastener tolerance.
pub const STRUCTURAL_SEGMENTS: u32 = 60;

/// Segment count for small or purely decorative circles.
///
/// Used for proxies and cosmetic holes to bound mesh cost.
pub const DECORATIVE_SEGMENTS: u32 = 20;

/// Smallest segment count that still forms a closed polygon.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SEGMENTS;
///
/// assert_eq!(MIN_SEGMENTS, 3);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

/// Largest segment count accepted for any circle.
///
/// Bounds the memory spent on tessellation and on the degenerate-geometry
/// analysis, which samples every segment vertex.
///
/// # Example
///
/// ```rust
/// use config::resolution::ResolutionPolicy;
/// use config::constants::MAX_SEGMENTS;
///
/// assert!(ResolutionPolicy::uniform(MAX_SEGMENTS).is_ok());
/// assert!(ResolutionPolicy::uniform(MAX_SEGMENTS + 1).is_err());
/// ```
pub const MAX_SEGMENTS: u32 = 1000;

// =============================================================================
// MOTOR MOUNT
// =============================================================================

/// Thickness of the motor mount disc (mm).
pub const MOTOR_MOUNT_HEIGHT: f64 = 3.0;

/// Material left between the bolt circle and the outer rim (mm).
///
/// Outer radius is `bolt_spacing / 2 + MOTOR_MOUNT_RIM_MARGIN`.
pub const MOTOR_MOUNT_RIM_MARGIN: f64 = 3.0;

/// Default bolt hole diameter (mm), an M2 clearance hole.
pub const DEFAULT_BOLT_HOLE_DIAMETER: f64 = 2.2;

/// Extra height added to through-holes on each side of the plate (mm).
pub const THROUGH_HOLE_CLEARANCE: f64 = 1.0;

// =============================================================================
// FLIGHT CONTROLLER MOUNT
// =============================================================================

/// Height of each FC standoff post (mm).
pub const FC_POST_HEIGHT: f64 = 5.0;

/// Radius of each FC standoff post (mm).
pub const FC_POST_RADIUS: f64 = 2.0;

// =============================================================================
// FRAME BODY
// =============================================================================

/// Radius of the central hub cylinder of each arm (mm).
pub const FRAME_HUB_RADIUS: f64 = 10.0;

/// Radius of the motor-end cylinder of each arm (mm).
pub const FRAME_TIP_RADIUS: f64 = 5.0;

/// cos(45°), projects half the wheelbase onto each axis of an X frame.
///
/// Kept at the historical 8-digit precision so generated coordinates match
/// previously emitted models.
pub const DIAGONAL_FACTOR: f64 = 0.707_106_78;

/// Arm thickness used by the frame kit when none is given (mm).
pub const DEFAULT_ARM_THICKNESS: f64 = 2.5;

/// Shaft hole diameter used by the frame kit motor mounts (mm).
pub const DEFAULT_KIT_SHAFT_HOLE: f64 = 2.0;

// =============================================================================
// PROXIES
// =============================================================================

/// Radius of the motor proxy shaft (mm).
pub const PROXY_MOTOR_SHAFT_RADIUS: f64 = 1.5;

/// Height of the motor proxy shaft above the bell (mm).
pub const PROXY_MOTOR_SHAFT_HEIGHT: f64 = 5.0;

/// Thickness of the FC proxy board (mm).
pub const PROXY_FC_BOARD_THICKNESS: f64 = 1.6;

/// Radius of the FC proxy mounting holes (mm).
pub const PROXY_FC_HOLE_RADIUS: f64 = 1.6;

/// USB port block as [depth, width, height] (mm).
pub const PROXY_FC_USB_SIZE: [f64; 3] = [7.5, 9.0, 3.2];

/// Diameter of the propeller hub (mm); blades start at its rim.
pub const PROXY_PROP_HUB_DIAMETER: f64 = 5.0;

/// Height of the propeller hub (mm).
pub const PROXY_PROP_HUB_HEIGHT: f64 = 6.0;

/// Blade pitch about its long axis (degrees).
pub const PROXY_PROP_PITCH_DEGREES: f64 = 10.0;

/// Blade chord as a fraction of the propeller diameter.
pub const PROXY_PROP_CHORD_RATIO: f64 = 0.1;

/// Blade thickness (mm).
pub const PROXY_PROP_BLADE_THICKNESS: f64 = 1.0;

/// Camera body depth as a fraction of its width.
pub const PROXY_CAMERA_DEPTH_RATIO: f64 = 0.8;

/// Lens radius as a fraction of the camera width.
pub const PROXY_CAMERA_LENS_RATIO: f64 = 1.0 / 3.0;

/// Lens protrusion past the front face as a fraction of the camera width.
pub const PROXY_CAMERA_LENS_PROTRUSION_RATIO: f64 = 0.25;

/// How far the lens starts behind the front face (mm).
pub const PROXY_CAMERA_LENS_INSET: f64 = 1.0;

/// Depth (mm) by which joined proxy pieces sink into each other, so the
/// union never relies on two faces merely touching.
pub const PROXY_JOIN_OVERLAP: f64 = 0.5;

/// Battery connector nub length past the pack end (mm).
pub const PROXY_BATTERY_NUB_LENGTH: f64 = 4.0;

/// Battery connector nub cross-section as a fraction of the pack's.
pub const PROXY_BATTERY_NUB_RATIO: f64 = 0.5;

// =============================================================================
// FASTENERS
// =============================================================================

/// Motor patterns wider than this (mm) take M3 screws.
pub const M3_PATTERN_THRESHOLD: f64 = 15.0;

/// Motor patterns wider than this (mm) take M2 screws; smaller ones M1.4.
pub const M2_PATTERN_THRESHOLD: f64 = 8.0;

/// M3 clearance hole diameter (mm).
pub const M3_CLEARANCE_HOLE: f64 = 3.2;

/// M3 heat-set insert hole diameter (mm).
pub const M3_INSERT_HOLE: f64 = 4.0;

/// M2 clearance hole diameter (mm).
pub const M2_CLEARANCE_HOLE: f64 = 2.2;

/// M2 heat-set insert hole diameter (mm).
pub const M2_INSERT_HOLE: f64 = 3.2;

/// M1.4 self-tapping pilot hole diameter (mm). Inserts are not made this small.
pub const M1_4_PILOT_HOLE: f64 = 1.5;

/// Added to twice the prop diameter to get a wheelbase with prop clearance (mm).
pub const WHEELBASE_PROP_MARGIN: f64 = 15.0;

// =============================================================================
// DEFAULT DRONE
// =============================================================================

/// Motor bolt-circle diameter of the default build (mm).
pub const DEFAULT_MOTOR_MOUNTING: f64 = 6.6;

/// Prop diameter of the default build (mm).
pub const DEFAULT_PROP_DIAMETER: f64 = 31.0;

/// FC bolt pattern side of the default build (mm).
pub const DEFAULT_FC_MOUNTING: f64 = 25.5;

/// Camera face width of the default build (mm).
pub const DEFAULT_CAMERA_WIDTH: f64 = 14.0;

/// Battery size of the default build as [length, width, height] (mm).
pub const DEFAULT_BATTERY_SIZE: [f64; 3] = [60.0, 12.0, 7.0];

/// Motor proxy diameter beyond the bolt circle (mm).
pub const ASSET_MOTOR_DIAMETER_MARGIN: f64 = 2.0;

/// Motor proxy height (mm).
pub const ASSET_MOTOR_HEIGHT: f64 = 8.0;

/// FC board side beyond its bolt pattern (mm).
pub const ASSET_FC_BOARD_MARGIN: f64 = 5.0;

// =============================================================================
// ASSEMBLY LAYOUT
// =============================================================================

/// Height of the motors above the frame plane (mm).
pub const LAYOUT_MOTOR_HEIGHT: f64 = 5.0;

/// Height of the props above their motor (mm).
pub const LAYOUT_PROP_LIFT: f64 = 10.0;

/// FC stack position (mm).
pub const LAYOUT_STACK_POSITION: [f64; 3] = [0.0, 0.0, 8.0];

/// Camera position (mm), ahead of the stack on +Y.
pub const LAYOUT_CAMERA_POSITION: [f64; 3] = [0.0, 35.0, 10.0];

/// Battery position (mm), under the frame.
pub const LAYOUT_BATTERY_POSITION: [f64; 3] = [0.0, 0.0, -20.0];

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Motor bell color (dark gray). RGBA in [0.0, 1.0].
pub const MOTOR_COLOR: [f32; 4] = [0.25, 0.25, 0.28, 1.0];

/// Shaft and metal accents (silver).
pub const METAL_COLOR: [f32; 4] = [0.75, 0.75, 0.78, 1.0];

/// FC board color (PCB green).
pub const PCB_COLOR: [f32; 4] = [0.1, 0.45, 0.2, 1.0];

/// Propeller color (translucent orange).
pub const PROP_COLOR: [f32; 4] = [1.0, 0.55, 0.1, 0.8];

/// Camera body color (black).
pub const CAMERA_COLOR: [f32; 4] = [0.08, 0.08, 0.08, 1.0];

/// Camera lens color (dark blue).
pub const LENS_COLOR: [f32; 4] = [0.1, 0.15, 0.4, 1.0];

/// Battery pack color (yellow).
pub const BATTERY_COLOR: [f32; 4] = [0.95, 0.8, 0.1, 1.0];

/// Battery connector color (red).
pub const CONNECTOR_COLOR: [f32; 4] = [0.8, 0.1, 0.1, 1.0];
