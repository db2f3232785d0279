//! Validates text and PNG export of generated maps.

use cavegen::io::configuration::TILE_PIXEL_SIZE;
use cavegen::io::image::export_map_as_png;
use cavegen::io::text::write_map_as_text;
use cavegen::{Tile, TileMap};
use ndarray::Array2;

fn checkerboard(rows: usize, cols: usize) -> TileMap {
    let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
        if (row + col) % 2 == 0 {
            Tile::Floor
        } else {
            Tile::Wall
        }
    });
    TileMap::new(cells)
}

#[test]
fn test_text_export_writes_one_line_per_row() {
    let map = checkerboard(2, 3);
    let mut buffer = Vec::new();

    write_map_as_text(&map, &mut buffer).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text, ".x.\nx.x\n");
}

#[test]
fn test_text_export_of_a_single_cell() {
    let map = TileMap::filled(1, 1, Tile::Wall);
    let mut buffer = Vec::new();

    write_map_as_text(&map, &mut buffer).unwrap();
    assert_eq!(buffer, b"x\n");
}

#[test]
fn test_png_export_scales_tiles_to_pixel_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("map.png");
    let output_str = output.to_string_lossy().into_owned();

    let map = checkerboard(3, 5);
    export_map_as_png(&map, &output_str).unwrap();

    let img = image::open(&output).unwrap().into_rgba8();
    assert_eq!(img.width(), 5 * TILE_PIXEL_SIZE);
    assert_eq!(img.height(), 3 * TILE_PIXEL_SIZE);
}

#[test]
fn test_png_export_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nested/out/map.png");
    let output_str = output.to_string_lossy().into_owned();

    let map = TileMap::filled(2, 2, Tile::Wall);
    export_map_as_png(&map, &output_str).unwrap();

    assert!(output.exists());
}

#[test]
fn test_png_export_rejects_empty_maps() {
    let map = TileMap::filled(0, 3, Tile::Wall);
    assert!(export_map_as_png(&map, "unused.png").is_err());
}
