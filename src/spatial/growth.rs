//! Vertical map growth
//!
//! Appends a full row of wall at the top or bottom of an existing map,
//! used for incremental extension of a level that is already generated.
//! The input map is preserved row for row; only the new border row is
//! added.

use ndarray::Array2;

use crate::io::error::{GenerationError, Result};
use crate::spatial::map::{Tile, TileMap};

/// Which edge of the map receives the new wall row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthSide {
    /// Insert the row before all existing rows
    Top,
    /// Append the row after all existing rows
    Bottom,
}

/// Produce a map one row taller, padded with wall on the requested side
///
/// The new row replicates the width of the existing rows; every other row
/// keeps its original cell values and relative order.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidDimensions`] if the input map is
/// empty, since an empty map has no width to replicate.
pub fn grow(map: TileMap, side: GrowthSide) -> Result<TileMap> {
    if map.is_empty() {
        return Err(GenerationError::InvalidDimensions {
            rows: map.rows(),
            cols: map.cols(),
        });
    }

    let (rows, cols) = map.dimensions();
    let source = map.cells();

    let grown = Array2::from_shape_fn((rows + 1, cols), |(row, col)| {
        let source_row = match side {
            GrowthSide::Top => {
                if row == 0 {
                    return Tile::Wall;
                }
                row - 1
            }
            GrowthSide::Bottom => {
                if row == rows {
                    return Tile::Wall;
                }
                row
            }
        };
        source.get((source_row, col)).copied().unwrap_or(Tile::Wall)
    });

    Ok(TileMap::new(grown))
}
