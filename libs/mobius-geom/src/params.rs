//! # Strip Parameters
//!
//! Construction parameters for the Möbius strip surface.

use crate::error::GeomError;
use config::constants::{
    DEFAULT_RADIUS, DEFAULT_RESOLUTION, DEFAULT_WIDTH, MAX_RESOLUTION, MIN_RESOLUTION,
};
use serde::{Deserialize, Serialize};

/// Parameters describing a Möbius strip.
///
/// # Example
///
/// ```rust
/// use mobius_geom::MobiusParams;
///
/// let params = MobiusParams::default();
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MobiusParams {
    /// Distance from the center axis to the strip midline
    pub radius: f64,
    /// Width of the strip (v spans [-width/2, width/2])
    pub width: f64,
    /// Number of samples along each parameter direction
    pub resolution: usize,
}

impl Default for MobiusParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            width: DEFAULT_WIDTH,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl MobiusParams {
    /// Creates parameters from explicit values.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Self {
        Self {
            radius,
            width,
            resolution,
        }
    }

    /// Validates the parameters.
    ///
    /// Rejects non-positive radius or width and resolutions outside
    /// the supported range.
    pub fn validate(&self) -> Result<(), GeomError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeomError::invalid_parameter(format!(
                "Strip radius must be positive: {}",
                self.radius
            )));
        }

        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(GeomError::invalid_parameter(format!(
                "Strip width must be positive: {}",
                self.width
            )));
        }

        if self.resolution < MIN_RESOLUTION {
            return Err(GeomError::invalid_parameter(format!(
                "Resolution must be at least {}: {}",
                MIN_RESOLUTION, self.resolution
            )));
        }

        if self.resolution > MAX_RESOLUTION {
            return Err(GeomError::invalid_parameter(format!(
                "Resolution must be at most {}: {}",
                MAX_RESOLUTION, self.resolution
            )));
        }

        Ok(())
    }

    /// Half of the strip width, the extreme of the v parameter.
    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }
}
