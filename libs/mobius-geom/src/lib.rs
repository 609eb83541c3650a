//! # Möbius Geometry
//!
//! Parametric Möbius strip surface with numerical measurements.
//! Samples the half-twist embedding on a uniform (u, v) grid and derives
//! the surface area and boundary edge length from it.
//!
//! ## Architecture
//!
//! ```text
//! MobiusParams → MobiusStrip (SurfaceGrid + cached scalars)
//! ```
//!
//! ## Algorithms
//!
//! All computation is deterministic, synchronous, and allocation-light:
//! - **Mapping**: half-twist embedding evaluated element-wise per grid cell
//! - **Surface area**: Riemann sum of |∂r/∂u × ∂r/∂v| over the grid
//! - **Edge length**: polyline approximation of both boundary curves
//!
//! ## Usage
//!
//! ```rust
//! use mobius_geom::{MobiusParams, MobiusStrip};
//!
//! let strip = MobiusStrip::new(MobiusParams::new(5.0, 2.0, 100))?;
//! println!("Surface Area: {:.2}", strip.surface_area());
//! println!("Edge Length: {:.2}", strip.edge_length());
//! # Ok::<(), mobius_geom::GeomError>(())
//! ```

pub mod error;
pub mod grid;
pub mod measure;
pub mod params;
pub mod surface;

pub use error::GeomError;
pub use grid::{ParamGrid, SurfaceGrid};
pub use params::MobiusParams;
pub use surface::MobiusStrip;
