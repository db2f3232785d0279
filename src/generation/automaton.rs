//! Cellular automaton smoothing
//!
//! Each pass replaces every cell with the majority vote of its 8
//! neighbours: more walls than the threshold turns the cell to wall,
//! anything else turns it to floor. Neighbour positions outside the map
//! count as walls, which biases the border toward solid rock and encloses
//! the level naturally.
//!
//! A pass always reads a snapshot of the previous pass and writes a fresh
//! grid. Updating in place while scanning would let a cell see neighbours
//! already rewritten during the same pass, making the result depend on
//! scan order.

use ndarray::Array2;

use crate::io::configuration::WALL_NEIGHBOUR_THRESHOLD;
use crate::io::error::{GenerationError, Result};
use crate::spatial::map::{Tile, TileMap, in_bounds};

/// Multi-pass majority-vote smoother
///
/// The wall threshold is fixed per automaton; construct one with
/// [`Automaton::with_threshold`] when the default of
/// [`WALL_NEIGHBOUR_THRESHOLD`] does not fit.
#[derive(Debug, Clone, Copy)]
pub struct Automaton {
    wall_threshold: usize,
}

impl Default for Automaton {
    fn default() -> Self {
        Self {
            wall_threshold: WALL_NEIGHBOUR_THRESHOLD,
        }
    }
}

impl Automaton {
    /// Create a smoother with a non-default wall threshold
    pub const fn with_threshold(wall_threshold: usize) -> Self {
        Self { wall_threshold }
    }

    /// The wall-neighbour count a cell must exceed to become wall
    pub const fn wall_threshold(&self) -> usize {
        self.wall_threshold
    }

    /// Run `passes` smoothing iterations over the map
    ///
    /// Dimensions never change; `passes == 0` returns the map untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidDimensions`] if the map is empty.
    pub fn smooth(&self, map: TileMap, passes: usize) -> Result<TileMap> {
        if map.is_empty() {
            return Err(GenerationError::InvalidDimensions {
                rows: map.rows(),
                cols: map.cols(),
            });
        }

        let mut current = map.into_cells();
        for _ in 0..passes {
            current = self.smooth_pass(&current);
        }
        Ok(TileMap::new(current))
    }

    // Single pass: `snapshot` is only read, the returned grid only written.
    fn smooth_pass(&self, snapshot: &Array2<Tile>) -> Array2<Tile> {
        let (rows, cols) = snapshot.dim();
        Array2::from_shape_fn((rows, cols), |(row, col)| {
            if count_wall_neighbours(snapshot, row, col) > self.wall_threshold {
                Tile::Wall
            } else {
                Tile::Floor
            }
        })
    }
}

// Walls among the 8 surrounding positions; out-of-bounds counts as wall.
fn count_wall_neighbours(snapshot: &Array2<Tile>, row: usize, col: usize) -> usize {
    let (rows, cols) = snapshot.dim();
    let mut walls = 0;

    for row_offset in -1..=1i64 {
        for col_offset in -1..=1i64 {
            if row_offset == 0 && col_offset == 0 {
                continue;
            }
            let neighbour_row = row as i64 + row_offset;
            let neighbour_col = col as i64 + col_offset;

            if !in_bounds(neighbour_row, neighbour_col, rows, cols) {
                walls += 1;
                continue;
            }
            if snapshot
                .get((neighbour_row as usize, neighbour_col as usize))
                .copied()
                .is_some_and(Tile::is_wall)
            {
                walls += 1;
            }
        }
    }

    walls
}
