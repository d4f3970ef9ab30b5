//! Console front end for the minesweeper engine: line-based input and plain text output.

pub use input::*;
pub use output::*;

mod input;
mod output;

/// Rows are addressed by a single letter, which caps the playable grid size.
pub const MAX_GRID_SIZE: sweeper_core::Coord = 26;

/// Letter labelling `row`, `?` past `Z`.
pub fn row_label(row: sweeper_core::Coord) -> char {
    if row < MAX_GRID_SIZE {
        char::from(b'A' + row as u8)
    } else {
        '?'
    }
}
