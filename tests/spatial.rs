//! Validates tile grid accessors, bounds checking, and wall-row growth.

use cavegen::spatial::growth::{GrowthSide, grow};
use cavegen::spatial::map::in_bounds;
use cavegen::{GenerationError, Tile, TileMap};
use ndarray::Array2;

// 2x3 map with one floor marker per row to track row order through growth
fn marked_map() -> TileMap {
    let cells = Array2::from_shape_fn((2, 3), |(row, col)| {
        if col == row {
            Tile::Floor
        } else {
            Tile::Wall
        }
    });
    TileMap::new(cells)
}

#[test]
fn test_grow_top_prepends_one_wall_row() {
    let grown = grow(marked_map(), GrowthSide::Top).unwrap();

    assert_eq!(grown.dimensions(), (3, 3));
    for col in 0..3 {
        assert_eq!(grown.get(0, col), Some(Tile::Wall));
    }
    // Original rows shift down by one, contents untouched
    assert_eq!(grown.get(1, 0), Some(Tile::Floor));
    assert_eq!(grown.get(2, 1), Some(Tile::Floor));
    assert_eq!(grown.get(1, 1), Some(Tile::Wall));
}

#[test]
fn test_grow_bottom_appends_one_wall_row() {
    let grown = grow(marked_map(), GrowthSide::Bottom).unwrap();

    assert_eq!(grown.dimensions(), (3, 3));
    for col in 0..3 {
        assert_eq!(grown.get(2, col), Some(Tile::Wall));
    }
    assert_eq!(grown.get(0, 0), Some(Tile::Floor));
    assert_eq!(grown.get(1, 1), Some(Tile::Floor));
}

#[test]
fn test_grow_rejects_empty_maps() {
    let empty = TileMap::filled(0, 0, Tile::Wall);
    let err = grow(empty, GrowthSide::Top).unwrap_err();

    match err {
        GenerationError::InvalidDimensions { rows, cols } => {
            assert_eq!((rows, cols), (0, 0));
        }
        _ => unreachable!("Expected InvalidDimensions error type"),
    }
}

#[test]
fn test_repeated_growth_stacks_wall_rows() {
    let mut map = TileMap::filled(1, 4, Tile::Floor);
    map = grow(map, GrowthSide::Top).unwrap();
    map = grow(map, GrowthSide::Bottom).unwrap();

    assert_eq!(map.dimensions(), (3, 4));
    assert!((0..4).all(|col| map.get(0, col) == Some(Tile::Wall)));
    assert!((0..4).all(|col| map.get(1, col) == Some(Tile::Floor)));
    assert!((0..4).all(|col| map.get(2, col) == Some(Tile::Wall)));
}

#[test]
fn test_in_bounds_accepts_interior_and_rejects_edges() {
    assert!(in_bounds(0, 0, 3, 3));
    assert!(in_bounds(2, 2, 3, 3));

    assert!(!in_bounds(-1, 0, 3, 3));
    assert!(!in_bounds(0, -1, 3, 3));
    assert!(!in_bounds(3, 0, 3, 3));
    assert!(!in_bounds(0, 3, 3, 3));
}

#[test]
fn test_map_get_is_none_outside_the_grid() {
    let map = TileMap::filled(2, 2, Tile::Floor);

    assert_eq!(map.get(1, 1), Some(Tile::Floor));
    assert_eq!(map.get(2, 0), None);
    assert_eq!(map.get(0, 2), None);
}

#[test]
fn test_tile_symbols_match_the_text_format() {
    assert_eq!(Tile::Floor.symbol(), '.');
    assert_eq!(Tile::Wall.symbol(), 'x');
    assert!(Tile::Wall.is_wall());
    assert!(!Tile::Floor.is_wall());
}
