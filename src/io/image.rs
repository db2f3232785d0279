//! PNG export of generated maps
//!
//! Each tile becomes a square block of pixels so small maps stay legible
//! when opened in an image viewer. Colours are fixed here rather than on
//! the tile type; the core algorithm knows nothing about presentation.

use image::{ImageBuffer, Rgba};

use crate::io::configuration::TILE_PIXEL_SIZE;
use crate::io::error::{GenerationError, Result};
use crate::spatial::map::{Tile, TileMap};

// Sandy floor on dark rock, close to the classic roguelike palette
const FLOOR_COLOUR: Rgba<u8> = Rgba([222, 205, 160, 255]);
const WALL_COLOUR: Rgba<u8> = Rgba([54, 48, 44, 255]);

const fn tile_colour(tile: Tile) -> Rgba<u8> {
    match tile {
        Tile::Floor => FLOOR_COLOUR,
        Tile::Wall => WALL_COLOUR,
    }
}

/// Export the map as a PNG image, one `TILE_PIXEL_SIZE` block per tile
///
/// # Errors
///
/// Returns an error if:
/// - The map is empty (there is nothing to draw)
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_as_png(map: &TileMap, output_path: &str) -> Result<()> {
    if map.is_empty() {
        return Err(GenerationError::InvalidDimensions {
            rows: map.rows(),
            cols: map.cols(),
        });
    }

    let width = map.cols() as u32 * TILE_PIXEL_SIZE;
    let height = map.rows() as u32 * TILE_PIXEL_SIZE;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / TILE_PIXEL_SIZE) as usize;
        let col = (x / TILE_PIXEL_SIZE) as usize;
        tile_colour(map.get(row, col).unwrap_or(Tile::Wall))
    });

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GenerationError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
