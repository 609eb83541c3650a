//! # Surface Colormap
//!
//! Sequential colormap for shading the surface by height. Control points
//! follow the familiar dark-purple-to-yellow gradient, linearly
//! interpolated.

use plotters::style::RGBColor;

/// Gradient control points, evenly spaced over [0, 1].
const CONTROL_POINTS: [(f64, f64, f64); 9] = [
    (0.267, 0.005, 0.329),
    (0.281, 0.155, 0.469),
    (0.244, 0.292, 0.538),
    (0.191, 0.407, 0.556),
    (0.147, 0.511, 0.557),
    (0.120, 0.618, 0.536),
    (0.208, 0.719, 0.473),
    (0.430, 0.813, 0.346),
    (0.993, 0.906, 0.144),
];

/// Maps a normalized value in [0, 1] to a gradient color.
///
/// Values outside the range are clamped.
///
/// # Example
///
/// ```rust
/// use mobius_render::color::colormap;
///
/// let low = colormap(0.0);
/// let high = colormap(1.0);
/// assert_ne!(low, high);
/// ```
pub fn colormap(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (CONTROL_POINTS.len() - 1) as f64;
    let index = (scaled.floor() as usize).min(CONTROL_POINTS.len() - 2);
    let frac = scaled - index as f64;

    let (r0, g0, b0) = CONTROL_POINTS[index];
    let (r1, g1, b1) = CONTROL_POINTS[index + 1];

    let lerp = |a: f64, b: f64| a + (b - a) * frac;
    RGBColor(
        (lerp(r0, r1) * 255.0).round() as u8,
        (lerp(g0, g1) * 255.0).round() as u8,
        (lerp(b0, b1) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colormap_endpoints() {
        assert_eq!(colormap(0.0), RGBColor(68, 1, 84));
        assert_eq!(colormap(1.0), RGBColor(253, 231, 37));
    }

    #[test]
    fn test_colormap_clamps_out_of_range() {
        assert_eq!(colormap(-3.0), colormap(0.0));
        assert_eq!(colormap(42.0), colormap(1.0));
    }

    #[test]
    fn test_colormap_is_monotone_in_red_at_top_end() {
        // The gradient brightens toward yellow
        let mid = colormap(0.5);
        let high = colormap(0.95);
        assert!(high.0 > mid.0);
    }

    #[test]
    fn test_colormap_interpolates_between_controls() {
        let a = colormap(0.0);
        let b = colormap(0.0625);
        let c = colormap(0.125);
        assert_ne!(a, b);
        assert_ne!(b, c);
    }
}
