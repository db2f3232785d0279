//! Random noise seeding
//!
//! Produces the initial map the automaton smooths: every cell is drawn
//! independently, floor with probability `density`, wall otherwise. The
//! random source is injected so callers can seed a deterministic generator
//! and reproduce a map exactly.

use ndarray::Array2;
use rand::Rng;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GenerationError, Result};
use crate::spatial::map::{Tile, TileMap};

/// Seed a fresh `rows x cols` map from uniform noise
///
/// Cells are sampled in row-major order (left to right, top to bottom), one
/// uniform draw in `[0, 1)` per cell; a draw at or below `density` seeds
/// floor. The fixed order makes output reproducible for a seeded generator.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidDimensions`] if either dimension is
/// zero or exceeds [`MAX_GRID_DIMENSION`], and
/// [`GenerationError::InvalidDensity`] if `density` is NaN or outside
/// `[0, 1]`.
pub fn seed_noise_map<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    density: f64,
) -> Result<TileMap> {
    if rows == 0 || cols == 0 || rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(GenerationError::InvalidDimensions { rows, cols });
    }
    if !(0.0..=1.0).contains(&density) {
        return Err(GenerationError::InvalidDensity { value: density });
    }

    // from_shape_fn fills in row-major order, matching the sampling contract
    let cells = Array2::from_shape_fn((rows, cols), |_| {
        if rng.random::<f64>() <= density {
            Tile::Floor
        } else {
            Tile::Wall
        }
    });

    Ok(TileMap::new(cells))
}
