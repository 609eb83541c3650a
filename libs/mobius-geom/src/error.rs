//! # Geometry Errors
//!
//! Error types for Möbius strip construction and measurement.

use thiserror::Error;

/// Errors that can occur while building or measuring the strip.
#[derive(Debug, Error)]
pub enum GeomError {
    /// A construction parameter is out of range
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },
}

impl GeomError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}
