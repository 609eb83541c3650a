//! # Render Options
//!
//! Output geometry and camera settings for the surface renderer.

use config::constants::{DEFAULT_PITCH, DEFAULT_YAW, IMAGE_HEIGHT, IMAGE_WIDTH, OUTPUT_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for a single render pass.
///
/// # Example
///
/// ```rust
/// use mobius_render::RenderOptions;
///
/// let options = RenderOptions::default();
/// assert!(options.width > 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Camera pitch in radians
    pub pitch: f64,
    /// Camera yaw in radians
    pub yaw: f64,
    /// Destination of the image artifact
    pub path: PathBuf,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            pitch: DEFAULT_PITCH,
            yaw: DEFAULT_YAW,
            path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl RenderOptions {
    /// Returns a copy writing to a different destination.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_config() {
        let options = RenderOptions::default();
        assert_eq!(options.width, IMAGE_WIDTH);
        assert_eq!(options.height, IMAGE_HEIGHT);
        assert_eq!(options.path, PathBuf::from(OUTPUT_PATH));
    }

    #[test]
    fn test_with_path_overrides_destination() {
        let options = RenderOptions::default().with_path("custom.png");
        assert_eq!(options.path, PathBuf::from("custom.png"));
    }
}
