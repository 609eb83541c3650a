//! # Parameter and Surface Grids
//!
//! Uniform sampling of the (u, v) parameter domain and row-major storage
//! for the sampled surface points.

use glam::DVec3;
use std::f64::consts::PI;

/// Returns `n` evenly spaced samples over `[start, stop]`, inclusive of
/// both endpoints.
///
/// # Example
///
/// ```rust
/// use mobius_geom::grid::linspace;
///
/// let samples = linspace(0.0, 1.0, 5);
/// assert_eq!(samples, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }

    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Uniform sampling of the Möbius parameter domain.
///
/// `u` spans [0, 2π] around the ring, `v` spans [-width/2, width/2]
/// across the strip. Both sequences have the same length.
#[derive(Debug, Clone)]
pub struct ParamGrid {
    u: Vec<f64>,
    v: Vec<f64>,
}

impl ParamGrid {
    /// Samples the parameter domain at `resolution` points per direction.
    pub fn new(half_width: f64, resolution: usize) -> Self {
        Self {
            u: linspace(0.0, 2.0 * PI, resolution),
            v: linspace(-half_width, half_width, resolution),
        }
    }

    /// Returns the u samples.
    #[inline]
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Returns the v samples.
    #[inline]
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Returns the uniform spacing between consecutive u samples.
    #[inline]
    pub fn du(&self) -> f64 {
        self.u[1] - self.u[0]
    }

    /// Returns the uniform spacing between consecutive v samples.
    #[inline]
    pub fn dv(&self) -> f64 {
        self.v[1] - self.v[0]
    }
}

/// A rectangular grid of sampled surface points.
///
/// Points are stored row-major: rows indexed by v, columns by u. The
/// grid is immutable once built.
///
/// # Example
///
/// ```rust
/// use mobius_geom::grid::SurfaceGrid;
/// use glam::DVec3;
///
/// let points = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
/// let grid = SurfaceGrid::from_points(points, 2, 2);
/// assert_eq!(grid.point(1, 0), DVec3::Y);
/// ```
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    points: Vec<DVec3>,
    rows: usize,
    cols: usize,
}

impl SurfaceGrid {
    /// Creates a grid from row-major points.
    ///
    /// # Panics
    ///
    /// Panics if `points.len() != rows * cols`.
    pub fn from_points(points: Vec<DVec3>, rows: usize, cols: usize) -> Self {
        assert_eq!(points.len(), rows * cols, "point count must match grid shape");
        Self { points, rows, cols }
    }

    /// Returns the number of rows (v samples).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns (u samples).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the grid holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at row `i`, column `j`.
    #[inline]
    pub fn point(&self, i: usize, j: usize) -> DVec3 {
        self.points[i * self.cols + j]
    }

    /// Returns all points in row-major order.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.points.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.points[0];
        let mut max = self.points[0];

        for p in &self.points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }

        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let samples = linspace(0.0, 2.0 * PI, 100);
        assert_eq!(samples.len(), 100);
        assert_eq!(samples[0], 0.0);
        assert!((samples[99] - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_uniform_spacing() {
        let samples = linspace(-1.0, 1.0, 5);
        for pair in samples.windows(2) {
            assert!((pair[1] - pair[0] - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linspace_single_point() {
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn test_linspace_empty() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_param_grid_ranges() {
        let grid = ParamGrid::new(1.0, 50);
        assert_eq!(grid.u().len(), 50);
        assert_eq!(grid.v().len(), 50);
        assert_eq!(grid.u()[0], 0.0);
        assert!((grid.u()[49] - 2.0 * PI).abs() < 1e-12);
        assert_eq!(grid.v()[0], -1.0);
        assert!((grid.v()[49] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_param_grid_spacings() {
        let grid = ParamGrid::new(1.0, 101);
        assert!((grid.du() - 2.0 * PI / 100.0).abs() < 1e-12);
        assert!((grid.dv() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_surface_grid_indexing() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
        ];
        let grid = SurfaceGrid::from_points(points, 2, 2);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.point(0, 1), DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(grid.point(1, 1), DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_surface_grid_bounding_box() {
        let points = vec![
            DVec3::new(-1.0, -2.0, -3.0),
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::ZERO,
            DVec3::ONE,
        ];
        let grid = SurfaceGrid::from_points(points, 2, 2);
        let (min, max) = grid.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    #[should_panic]
    fn test_surface_grid_shape_mismatch_panics() {
        SurfaceGrid::from_points(vec![DVec3::ZERO; 3], 2, 2);
    }
}
