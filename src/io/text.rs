//! Plain-text export of generated maps
//!
//! Writes one line per row using the tile symbols (`.` floor, `x` wall),
//! the same form the map took in early prototyping. Writing to a generic
//! sink keeps the function usable against files, stdout locks, and byte
//! buffers in tests.

use std::io::Write;

use crate::io::error::{GenerationError, Result};
use crate::spatial::map::TileMap;

/// Write the map as rows of tile symbols, one line per row
///
/// # Errors
///
/// Returns [`GenerationError::FileSystem`] if the underlying writer fails.
pub fn write_map_as_text<W: Write>(map: &TileMap, writer: &mut W) -> Result<()> {
    let mut line = String::with_capacity(map.cols() + 1);

    for row in map.cells().rows() {
        line.clear();
        line.extend(row.iter().map(|tile| tile.symbol()));
        line.push('\n');
        writer
            .write_all(line.as_bytes())
            .map_err(|e| GenerationError::FileSystem {
                path: "<writer>".into(),
                operation: "write text map",
                source: e,
            })?;
    }

    Ok(())
}
