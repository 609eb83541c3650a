//! # Surface Measurements
//!
//! Numerical estimates of the strip's surface area and boundary edge
//! length. Accuracy scales with the grid resolution; no convergence
//! check or error bound is computed.

use crate::grid::ParamGrid;
use crate::surface::{mobius_partials, mobius_point};

/// Estimates the surface area over the full parameter domain.
///
/// Evaluates |∂r/∂u × ∂r/∂v| at every grid point and approximates the
/// double integral as a Riemann sum scaled by the uniform spacings
/// Δu·Δv.
pub fn surface_area(radius: f64, grid: &ParamGrid) -> f64 {
    let mut total = 0.0;
    for &v in grid.v() {
        for &u in grid.u() {
            let (d_u, d_v) = mobius_partials(radius, u, v);
            total += d_u.cross(d_v).length();
        }
    }

    total * grid.du() * grid.dv()
}

/// Estimates the length of one boundary curve at a fixed v offset.
///
/// Samples the curve over the u grid and sums consecutive-point
/// Euclidean distances (polyline approximation of arc length).
pub fn boundary_length(radius: f64, u: &[f64], v_edge: f64) -> f64 {
    u.windows(2)
        .map(|pair| {
            let a = mobius_point(radius, pair[0], v_edge);
            let b = mobius_point(radius, pair[1], v_edge);
            (b - a).length()
        })
        .sum()
}

/// Estimates the total edge length of the strip.
///
/// The boundaries at v = +width/2 and v = -width/2 together form the
/// strip's single connected edge, so their lengths are summed.
pub fn edge_length(radius: f64, half_width: f64, u: &[f64]) -> f64 {
    boundary_length(radius, u, half_width) + boundary_length(radius, u, -half_width)
}
