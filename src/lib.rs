//! Toroidal Game of Life
//!
//! A fixed-size universe of binary cells evolved under Conway's rule, with
//! edges wrapping around. The library owns the simulation; drawing is left to
//! whoever drives it (the bundled CLI renders frames as text).

pub mod config;
pub mod render;
pub mod universe;
pub mod utils;

pub use config::Settings;
pub use render::{CanvasLayout, Color, Palette};
pub use universe::{Cell, Seeder, Universe, UniverseError};

use anyhow::Result;

/// Build the universe described by `settings` and advance it `generations` times
pub fn simulate(settings: &Settings, generations: u64) -> Result<Universe> {
    let mut universe = settings.build_universe()?;
    universe.tick_n(generations);
    Ok(universe)
}
