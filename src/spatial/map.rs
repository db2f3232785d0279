//! Tile values and the rectangular grid they live in
//!
//! A map is a dense `rows x cols` matrix of floor/wall tiles in row-major
//! order. Dimensions are fixed for the lifetime of a map; growth produces a
//! new map rather than resizing in place.

use ndarray::Array2;

/// A single map cell, either walkable floor or solid wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Walkable, buildable ground
    Floor,
    /// Solid, impassable rock
    Wall,
}

impl Tile {
    /// Character used when the map is written as text
    pub const fn symbol(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Wall => 'x',
        }
    }

    /// Whether this tile blocks movement
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}

/// Rectangular grid of tiles with fixed dimensions
///
/// Backed by a dense 2D array, so the grid can never be jagged. Each
/// generation stage takes the map by value and hands back a new one;
/// no two stages ever alias the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    cells: Array2<Tile>,
}

impl TileMap {
    /// Wrap an existing cell matrix
    pub const fn new(cells: Array2<Tile>) -> Self {
        Self { cells }
    }

    /// Create a map with every cell set to the same tile
    pub fn filled(rows: usize, cols: usize, tile: Tile) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), tile),
        }
    }

    /// Number of rows in the map
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the map
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Current map dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Whether the map holds no cells at all
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Tile at the given position, or `None` outside the map
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get((row, col)).copied()
    }

    /// Borrow the underlying cell matrix
    pub const fn cells(&self) -> &Array2<Tile> {
        &self.cells
    }

    /// Take ownership of the underlying cell matrix
    pub fn into_cells(self) -> Array2<Tile> {
        self.cells
    }
}

/// Check whether a signed position lies inside a `rows x cols` grid
///
/// Used by the smoother's neighbour counting, where offsets step one cell
/// past every edge of the map.
pub const fn in_bounds(row: i64, col: i64, rows: usize, cols: usize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols
}
