//! # Config Crate
//!
//! Centralized configuration constants for the Möbius strip pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_RESOLUTION, MIN_RESOLUTION};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Clamp a requested grid resolution into the supported range
//! let requested = 1;
//! let resolution = requested.max(MIN_RESOLUTION);
//! assert!(resolution >= MIN_RESOLUTION);
//! assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic**: No platform-specific or runtime-derived values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
