//! Algorithm constants and runtime configuration defaults

/// Wall-neighbour count a cell must exceed to become wall during smoothing
pub const WALL_NEIGHBOUR_THRESHOLD: usize = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed map dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default probability that a seeded cell is floor
pub const DEFAULT_DENSITY: f64 = 0.4;

/// Default number of smoothing passes
pub const DEFAULT_PASSES: usize = 1;

/// Default map width in tiles
pub const DEFAULT_WIDTH: usize = 64;

/// Default map height in tiles
pub const DEFAULT_HEIGHT: usize = 48;

// Output settings
/// Side length in pixels of one exported tile
pub const TILE_PIXEL_SIZE: u32 = 8;
