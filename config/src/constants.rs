//! # Configuration Constants
//!
//! Centralized constants for the Möbius strip pipeline. All geometry
//! parameters, precision values, and render settings are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Strip parameters**: Default radius, width, and grid resolution
//! - **Limits**: Bounds on the grid resolution
//! - **Render**: Output image geometry and camera defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// STRIP PARAMETER CONSTANTS
// =============================================================================

/// Default distance from the center axis to the strip midline.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RADIUS;
///
/// assert!(DEFAULT_RADIUS > 0.0);
/// ```
pub const DEFAULT_RADIUS: f64 = 5.0;

/// Default width of the strip.
///
/// The strip extends from -width/2 to +width/2 across its midline.
/// Must stay below twice the radius or the surface self-intersects
/// near the axis.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_RADIUS, DEFAULT_WIDTH};
///
/// assert!(DEFAULT_WIDTH < 2.0 * DEFAULT_RADIUS);
/// ```
pub const DEFAULT_WIDTH: f64 = 2.0;

/// Default number of samples along each parameter direction.
///
/// The surface grid is resolution x resolution points. Larger values
/// tighten the area and edge-length estimates at quadratic cost in
/// memory and time.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_RESOLUTION, MIN_RESOLUTION};
///
/// assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
/// ```
pub const DEFAULT_RESOLUTION: usize = 100;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum grid resolution.
///
/// Two samples per direction is the smallest grid with a defined
/// spacing between consecutive points.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RESOLUTION;
///
/// let requested = 1;
/// let actual = requested.max(MIN_RESOLUTION);
/// assert_eq!(actual, MIN_RESOLUTION);
/// ```
pub const MIN_RESOLUTION: usize = 2;

/// Maximum grid resolution.
///
/// Safety limit to prevent excessive memory use from very large grids.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_RESOLUTION;
///
/// let requested = 100_000;
/// let actual = requested.min(MAX_RESOLUTION);
/// assert_eq!(actual, MAX_RESOLUTION);
/// ```
pub const MAX_RESOLUTION: usize = 4096;

// =============================================================================
// RENDER CONSTANTS
// =============================================================================

/// Output image width in pixels.
pub const IMAGE_WIDTH: u32 = 1024;

/// Output image height in pixels.
pub const IMAGE_HEIGHT: u32 = 768;

/// Relative path of the rendered image artifact.
///
/// # Example
///
/// ```rust
/// use config::constants::OUTPUT_PATH;
///
/// assert!(OUTPUT_PATH.ends_with(".png"));
/// ```
pub const OUTPUT_PATH: &str = "mobius_strip.png";

/// Default camera pitch in radians.
pub const DEFAULT_PITCH: f64 = 0.45;

/// Default camera yaw in radians.
pub const DEFAULT_YAW: f64 = 0.7;
