//! # Möbius Strip Analyzer
//!
//! Builds the strip from the default configuration, prints the surface
//! area and edge length, and writes the rendered image next to the
//! working directory. No CLI flags; all parameters come from `config`.

use mobius_geom::{MobiusParams, MobiusStrip};
use mobius_render::{render_surface, RenderOptions};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let params = MobiusParams::default();
    log::info!(
        "analyzing strip: R={}, w={}, n={}",
        params.radius,
        params.width,
        params.resolution
    );

    let strip = MobiusStrip::new(params)?;

    println!("Surface Area: {:.2}", strip.surface_area());
    println!("Edge Length: {:.2}", strip.edge_length());

    render_surface(strip.grid(), &RenderOptions::default())?;

    Ok(())
}
