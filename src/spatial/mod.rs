//! Spatial data structures for generated maps
//!
//! This module contains map-related functionality including:
//! - Tile grid storage and bounds checking
//! - Vertical map growth

/// Wall-row growth at the top or bottom of a map
pub mod growth;
/// Tile values and the rectangular tile grid
pub mod map;

pub use map::TileMap;
