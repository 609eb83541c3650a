//! # Möbius Render
//!
//! Static 3D rendering of the sampled Möbius surface through the
//! plotters bitmap backend.
//!
//! ## Architecture
//!
//! ```text
//! mobius-geom (SurfaceGrid) → mobius-render (PNG artifact)
//! ```
//!
//! The renderer is a pure consumer: it reads the grid, depth-sorts one
//! quad per cell, shades them by height, and writes a single image. It
//! returns nothing of computational significance.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mobius_render::{render_surface, RenderOptions};
//!
//! render_surface(strip.grid(), &RenderOptions::default())?;
//! ```

pub mod color;
pub mod error;
pub mod options;
pub mod plot;

pub use error::RenderError;
pub use options::RenderOptions;
pub use plot::render_surface;
