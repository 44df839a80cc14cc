//! Plain-text grid loader.
//!
//! ### Format
//! * One map row per line, cells separated by whitespace and/or commas.
//! * `#` starts a comment that runs to end of line.
//! * Blank lines are skipped; every remaining row must have the same length.
//!
//! ```text
//! # 4×3 room
//! 1 1 1 1
//! 1 0 0 1
//! 1 1 1 1
//! ```

use std::{fs, io, path::Path};
use thiserror::Error;

use super::grid::{GridMap, TileId};

/// Errors that can be encountered while reading or validating a map.
#[derive(Error, Debug)]
pub enum MapError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No rows after stripping comments and blank lines.
    #[error("map contains no rows")]
    Empty,

    /// A row length differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell is not a non-negative integer that fits a tile id.
    #[error("row {row}, column {col}: `{text}` is not a tile id")]
    BadTile { row: usize, col: usize, text: String },

    /// Tile count does not match `width × height`, or a dimension is zero.
    #[error("{tiles} tiles do not fill a {width}×{height} grid")]
    Dimensions {
        width: usize,
        height: usize,
        tiles: usize,
    },
}

/// Read and parse a map file.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<GridMap, MapError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let map = parse_map(&text)?;
    tracing::info!(
        path = %path.display(),
        width = map.width(),
        height = map.height(),
        "map loaded"
    );
    Ok(map)
}

/// Parse the text format described in the module docs.
pub fn parse_map(text: &str) -> Result<GridMap, MapError> {
    let mut width = None;
    let mut height = 0;
    let mut tiles = Vec::new();

    for line in text.lines() {
        let body = line.split('#').next().unwrap_or_default();
        let cells: Vec<&str> = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        if cells.is_empty() {
            continue;
        }

        let expected = *width.get_or_insert(cells.len());
        if cells.len() != expected {
            return Err(MapError::Ragged {
                row: height,
                expected,
                found: cells.len(),
            });
        }

        for (col, text) in cells.into_iter().enumerate() {
            let tile = text.parse::<TileId>().map_err(|_| MapError::BadTile {
                row: height,
                col,
                text: text.to_owned(),
            })?;
            tiles.push(tile);
        }
        height += 1;
    }

    match width {
        Some(width) => GridMap::new(width, height, tiles),
        None => Err(MapError::Empty),
    }
}
