//! # Möbius Surface
//!
//! The half-twist parametric embedding and the sampled strip it produces.
//!
//! ## Parametrization
//!
//! ```text
//! x = (R + v·cos(u/2))·cos(u)
//! y = (R + v·cos(u/2))·sin(u)
//! z = v·sin(u/2)
//! ```
//!
//! The cos(u/2)/sin(u/2) terms complete only half a rotation as u
//! traverses [0, 2π], which is what makes the strip non-orientable.

use crate::error::GeomError;
use crate::grid::{ParamGrid, SurfaceGrid};
use crate::measure;
use crate::params::MobiusParams;
use glam::DVec3;

/// Evaluates the Möbius embedding at a single (u, v) parameter pair.
///
/// # Arguments
///
/// * `radius` - Distance from the center axis to the strip midline
/// * `u` - Angle around the ring, in [0, 2π]
/// * `v` - Offset across the strip, in [-width/2, width/2]
///
/// # Example
///
/// ```rust
/// use mobius_geom::surface::mobius_point;
///
/// // The midline at u = 0 sits on the x axis
/// let p = mobius_point(5.0, 0.0, 0.0);
/// assert_eq!(p.x, 5.0);
/// assert_eq!(p.y, 0.0);
/// assert_eq!(p.z, 0.0);
/// ```
pub fn mobius_point(radius: f64, u: f64, v: f64) -> DVec3 {
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_h, cos_h) = (u / 2.0).sin_cos();
    let ring = radius + v * cos_h;

    DVec3::new(ring * cos_u, ring * sin_u, v * sin_h)
}

/// Evaluates the analytic partial derivatives of the embedding.
///
/// Returns (∂r/∂u, ∂r/∂v) at the given parameter pair. The cross
/// product of these tangents gives the local area element used by the
/// surface area estimator.
pub fn mobius_partials(radius: f64, u: f64, v: f64) -> (DVec3, DVec3) {
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_h, cos_h) = (u / 2.0).sin_cos();
    let ring = radius + v * cos_h;

    let d_u = DVec3::new(
        -v * sin_h * cos_u / 2.0 - ring * sin_u,
        -v * sin_h * sin_u / 2.0 + ring * cos_u,
        v * cos_h / 2.0,
    );
    let d_v = DVec3::new(cos_h * cos_u, cos_h * sin_u, sin_h);

    (d_u, d_v)
}

/// A sampled Möbius strip with cached measurements.
///
/// Construction samples the surface on an n x n grid and computes the
/// surface area and edge length once; the instance is immutable
/// afterwards.
///
/// # Example
///
/// ```rust
/// use mobius_geom::{MobiusParams, MobiusStrip};
///
/// let strip = MobiusStrip::new(MobiusParams::default()).unwrap();
/// assert!(strip.surface_area() > 0.0);
/// assert!(strip.edge_length() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    params: MobiusParams,
    param_grid: ParamGrid,
    grid: SurfaceGrid,
    surface_area: f64,
    edge_length: f64,
}

impl MobiusStrip {
    /// Builds the strip from validated parameters.
    ///
    /// Samples the embedding at every (u, v) pair of the parameter grid
    /// and caches the two derived scalars.
    pub fn new(params: MobiusParams) -> Result<Self, GeomError> {
        params.validate()?;

        let n = params.resolution;
        let param_grid = ParamGrid::new(params.half_width(), n);

        // Rows indexed by v, columns by u
        let mut points = Vec::with_capacity(n * n);
        for &v in param_grid.v() {
            for &u in param_grid.u() {
                points.push(mobius_point(params.radius, u, v));
            }
        }
        let grid = SurfaceGrid::from_points(points, n, n);

        let surface_area = measure::surface_area(params.radius, &param_grid);
        let edge_length =
            measure::edge_length(params.radius, params.half_width(), param_grid.u());

        log::debug!(
            "built {}x{} strip: area={:.4}, edge={:.4}",
            n,
            n,
            surface_area,
            edge_length
        );

        Ok(Self {
            params,
            param_grid,
            grid,
            surface_area,
            edge_length,
        })
    }

    /// Returns the construction parameters.
    #[inline]
    pub fn params(&self) -> &MobiusParams {
        &self.params
    }

    /// Returns the parameter grid.
    #[inline]
    pub fn param_grid(&self) -> &ParamGrid {
        &self.param_grid
    }

    /// Returns the sampled surface grid.
    #[inline]
    pub fn grid(&self) -> &SurfaceGrid {
        &self.grid
    }

    /// Returns the estimated surface area.
    #[inline]
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    /// Returns the estimated total edge length.
    ///
    /// The two parametric boundaries at v = ±width/2 together form the
    /// single connected edge of the strip.
    #[inline]
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::EPSILON;
    use std::f64::consts::PI;

    #[test]
    fn test_point_on_midline_circle() {
        // v = 0 traces the circle of radius R in the xy plane
        for i in 0..8 {
            let u = 2.0 * PI * i as f64 / 8.0;
            let p = mobius_point(5.0, u, 0.0);
            let ring = (p.x * p.x + p.y * p.y).sqrt();
            assert!((ring - 5.0).abs() < EPSILON);
            assert!(p.z.abs() < EPSILON);
        }
    }

    #[test]
    fn test_seam_identifies_flipped_v() {
        // The half-twist glues (u=0, v) to (u=2π, -v)
        for &v in &[-1.0, -0.5, 0.25, 1.0] {
            let start = mobius_point(5.0, 0.0, v);
            let end = mobius_point(5.0, 2.0 * PI, -v);
            assert!((start - end).length() < 1e-9);
        }
    }

    #[test]
    fn test_seam_midline_closes_exactly() {
        let start = mobius_point(5.0, 0.0, 0.0);
        let end = mobius_point(5.0, 2.0 * PI, 0.0);
        assert!((start - end).length() < 1e-9);
    }

    #[test]
    fn test_partials_match_finite_differences() {
        let h = 1e-6;
        for &(u, v) in &[(0.3, 0.4), (2.0, -0.7), (5.5, 0.9)] {
            let (d_u, d_v) = mobius_partials(5.0, u, v);

            let fd_u = (mobius_point(5.0, u + h, v) - mobius_point(5.0, u - h, v)) / (2.0 * h);
            let fd_v = (mobius_point(5.0, u, v + h) - mobius_point(5.0, u, v - h)) / (2.0 * h);

            assert!((d_u - fd_u).length() < 1e-5);
            assert!((d_v - fd_v).length() < 1e-5);
        }
    }

    #[test]
    fn test_strip_grid_is_square() {
        let strip = MobiusStrip::new(MobiusParams::new(5.0, 2.0, 25)).unwrap();
        assert_eq!(strip.grid().rows(), 25);
        assert_eq!(strip.grid().cols(), 25);
        assert_eq!(strip.grid().points().len(), 625);
    }

    #[test]
    fn test_reference_configuration_is_finite_positive() {
        // R=5, w=2, n=100 from the reference configuration
        let strip = MobiusStrip::new(MobiusParams::default()).unwrap();
        assert!(strip.surface_area().is_finite());
        assert!(strip.edge_length().is_finite());
        assert!(strip.surface_area() > 0.0);
        assert!(strip.edge_length() > 0.0);
    }

    #[test]
    fn test_invalid_params_rejected_at_construction() {
        assert!(MobiusStrip::new(MobiusParams::new(-5.0, 2.0, 100)).is_err());
        assert!(MobiusStrip::new(MobiusParams::new(5.0, 0.0, 100)).is_err());
        assert!(MobiusStrip::new(MobiusParams::new(5.0, 2.0, 1)).is_err());
    }

    #[test]
    fn test_grid_points_match_mapping() {
        let strip = MobiusStrip::new(MobiusParams::new(5.0, 2.0, 10)).unwrap();
        let u = strip.param_grid().u();
        let v = strip.param_grid().v();

        for i in 0..10 {
            for j in 0..10 {
                let expected = mobius_point(5.0, u[j], v[i]);
                assert!((strip.grid().point(i, j) - expected).length() < EPSILON);
            }
        }
    }
}
