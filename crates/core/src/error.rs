//! Error types for contract violations in the rules core.
//!
//! Blocked moves and unknown piece ids are ordinary outcomes and never show up
//! here; these errors mean the caller handed the core something malformed.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell value {value} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error(
        "figure {width}x{height} at ({x}, {y}) does not fit a {field_width}x{field_height} field"
    )]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        field_width: usize,
        field_height: usize,
    },
}
