//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced when parsing a grid from text.
///
/// Generation and cell access never fail; out-of-bounds reads return `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid text contains no rows")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("unknown glyph {glyph:?} at ({row}, {col}); expected '#' or '.'")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
}

pub type GridResult<T> = Result<T, GridError>;
