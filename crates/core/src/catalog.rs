//! Piece catalog - canonical tetromino shapes
//!
//! Lookup is total: every id maps to a shape, ids outside `0..7` fall back to
//! the I piece.

use crate::grid::Grid;
use crate::shape::Shape;
use crate::types::{Mino, PieceKind};

/// Raw occupancy rows of a catalog piece
pub type PieceRows = &'static [&'static [u8]];

const I: PieceRows = &[&[1, 1, 1, 1]];

const J: PieceRows = &[
    &[1, 0, 0], //
    &[1, 1, 1],
];

const L: PieceRows = &[
    &[0, 0, 1], //
    &[1, 1, 1],
];

const O: PieceRows = &[
    &[1, 1], //
    &[1, 1],
];

const S: PieceRows = &[
    &[0, 1, 1], //
    &[1, 1, 0],
];

const T: PieceRows = &[
    &[0, 1, 0], //
    &[1, 1, 1],
];

const Z: PieceRows = &[
    &[1, 1, 0], //
    &[0, 1, 1],
];

/// Raw rows for a piece kind
pub fn rows(kind: PieceKind) -> PieceRows {
    match kind {
        PieceKind::I => I,
        PieceKind::J => J,
        PieceKind::L => L,
        PieceKind::O => O,
        PieceKind::S => S,
        PieceKind::T => T,
        PieceKind::Z => Z,
    }
}

/// Canonical shape for a piece kind
pub fn shape(kind: PieceKind) -> Shape {
    let rows = rows(kind);
    let mut grid = Grid::new(rows[0].len(), rows.len());
    for (row, values) in rows.iter().enumerate() {
        for (col, &bit) in values.iter().enumerate() {
            if bit == 1 {
                grid.set(row, col, Mino::Filled);
            }
        }
    }
    Shape::from_grid(grid)
}

/// Canonical shape for a catalog id (0..7), I piece for anything else
///
/// ```
/// use bricks_core::catalog;
///
/// assert_eq!(catalog::shape_by_id(3).to_string(), "##\n##\n");
/// assert_eq!(catalog::shape_by_id(99), catalog::shape_by_id(0));
/// ```
pub fn shape_by_id(id: i32) -> Shape {
    shape(PieceKind::from_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_piece_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(shape(kind).filled_cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn rows_are_rectangular() {
        for kind in PieceKind::ALL {
            let r = rows(kind);
            assert!(r.iter().all(|row| row.len() == r[0].len()), "{:?}", kind);
        }
    }
}
