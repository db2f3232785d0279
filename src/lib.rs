//! Cellular automaton cave map generation from random noise
//!
//! The crate seeds a rectangular floor/wall grid from uniform noise, then
//! smooths it with repeated 8-neighbour majority votes into organic,
//! cave-like structures. Positions outside the grid count as walls, so the
//! result grows a natural enclosing border.

#![forbid(unsafe_code)]

/// Noise seeding and cellular automaton smoothing
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Tile grid storage, bounds checks, and grid growth
pub mod spatial;

pub use io::error::{GenerationError, Result};
pub use spatial::map::{Tile, TileMap};
