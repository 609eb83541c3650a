//! # Surface Plot
//!
//! Projects the sampled surface through a fixed-camera 3D chart and
//! paints one filled quad per grid cell, depth-sorted back to front
//! (painter's algorithm). The only side effect is the written image.

use crate::color::colormap;
use crate::error::RenderError;
use crate::options::RenderOptions;
use glam::DVec3;
use mobius_geom::SurfaceGrid;
use plotters::prelude::*;

/// One drawable grid cell.
struct Quad {
    /// Corner coordinates in chart space
    corners: [(f64, f64, f64); 4],
    /// Sort key; larger values are closer to the camera
    depth: f64,
    /// Normalized height used for coloring
    shade: f64,
}

/// Maps a surface point into chart space.
///
/// The chart treats its y axis as vertical, while the geometry uses z
/// as the vertical axis.
#[inline]
fn chart_coords(p: DVec3) -> (f64, f64, f64) {
    (p.x, p.z, p.y)
}

/// Signed distance of a chart-space point along the camera axis.
fn view_depth(point: (f64, f64, f64), pitch: f64, yaw: f64) -> f64 {
    let (x, y, z) = point;
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();

    // Yaw about the vertical axis, then pitch about the horizontal
    let rotated = z * cos_yaw - x * sin_yaw;
    rotated * cos_pitch - y * sin_pitch
}

/// Collects one quad per grid cell, shaded by geometric height.
fn collect_quads(grid: &SurfaceGrid, options: &RenderOptions) -> Vec<Quad> {
    let (min, max) = grid.bounding_box();
    let z_span = (max.z - min.z).max(f64::EPSILON);

    let mut quads = Vec::with_capacity((grid.rows() - 1) * (grid.cols() - 1));
    for i in 0..grid.rows() - 1 {
        for j in 0..grid.cols() - 1 {
            let cell = [
                grid.point(i, j),
                grid.point(i, j + 1),
                grid.point(i + 1, j + 1),
                grid.point(i + 1, j),
            ];

            let centroid = (cell[0] + cell[1] + cell[2] + cell[3]) / 4.0;
            let corners = [
                chart_coords(cell[0]),
                chart_coords(cell[1]),
                chart_coords(cell[2]),
                chart_coords(cell[3]),
            ];

            quads.push(Quad {
                corners,
                depth: view_depth(chart_coords(centroid), options.pitch, options.yaw),
                shade: (centroid.z - min.z) / z_span,
            });
        }
    }

    quads
}

/// Renders the surface grid to the image file named by the options.
///
/// # Arguments
///
/// * `grid` - The sampled surface (at least 2x2 points)
/// * `options` - Image geometry, camera angles, and destination path
///
/// # Example
///
/// ```rust,ignore
/// use mobius_render::{render_surface, RenderOptions};
///
/// render_surface(strip.grid(), &RenderOptions::default())?;
/// ```
pub fn render_surface(grid: &SurfaceGrid, options: &RenderOptions) -> Result<(), RenderError> {
    if grid.rows() < 2 || grid.cols() < 2 {
        return Err(RenderError::EmptySurface);
    }

    // Equal half-spans per axis keep the aspect ratio honest
    let (min, max) = grid.bounding_box();
    let center = (min + max) / 2.0;
    let half = (max - min).max_element() * 0.55 + f64::EPSILON;

    let x_range = (center.x - half)..(center.x + half);
    let vertical_range = (center.z - half)..(center.z + half);
    let z_range = (center.y - half)..(center.y + half);

    let mut quads = collect_quads(grid, options);
    // Painter's algorithm: draw the farthest cells first
    quads.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    let root =
        BitMapBackend::new(&options.path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(RenderError::backend)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Möbius Strip", ("sans-serif", 30))
        .build_cartesian_3d(x_range, vertical_range, z_range)
        .map_err(RenderError::backend)?;

    chart.with_projection(|mut pb| {
        pb.pitch = options.pitch;
        pb.yaw = options.yaw;
        pb.scale = 0.9;
        pb.into_matrix()
    });

    chart.configure_axes().draw().map_err(RenderError::backend)?;

    chart
        .draw_series(quads.iter().map(|quad| {
            Polygon::new(quad.corners.to_vec(), colormap(quad.shade).mix(0.9).filled())
        }))
        .map_err(RenderError::backend)?;

    root.present().map_err(RenderError::backend)?;
    log::info!("wrote surface render to {}", options.path.display());

    Ok(())
}
