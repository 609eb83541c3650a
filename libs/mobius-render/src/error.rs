//! # Render Errors
//!
//! Error types for the surface renderer.

use thiserror::Error;

/// Errors that can occur while rendering the surface.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The surface grid is too small to form any quad
    #[error("Surface grid has no drawable cells")]
    EmptySurface,

    /// The drawing backend failed
    #[error("Render backend failed: {message}")]
    Backend { message: String },
}

impl RenderError {
    /// Creates a backend error from any displayable failure.
    pub fn backend(message: impl std::fmt::Display) -> Self {
        Self::Backend {
            message: message.to_string(),
        }
    }
}
