//! Shape module - immutable piece occupancy matrices
//!
//! A shape never changes after construction. Rotation builds a new shape, so a
//! figure can hand out clones freely without any figure observing another's
//! rotation.

use std::fmt;

use crate::error::Result;
use crate::grid::Grid;
use crate::types::Mino;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    grid: Grid<Mino>,
}

impl Shape {
    pub fn from_grid(grid: Grid<Mino>) -> Self {
        Self { grid }
    }

    /// Build from 0/1 rows
    ///
    /// ```
    /// use bricks_core::Shape;
    ///
    /// let shape = Shape::from_bits(&[[0u8, 1, 0], [1, 1, 1]]).unwrap();
    /// assert_eq!(shape.width(), 3);
    /// assert_eq!(shape.height(), 2);
    /// ```
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        Grid::from_bits(rows, Mino::from_bit).map(Self::from_grid)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Whether the cell at (row, col) is filled; out of range reads as absent
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.grid.get(row, col).is_some_and(Mino::is_filled)
    }

    /// Local (row, col) of every filled cell, row by row
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height()).flat_map(move |row| {
            (0..self.width())
                .filter(move |&col| self.is_filled(row, col))
                .map(move |col| (row, col))
        })
    }

    /// One clockwise quarter turn
    ///
    /// A shape of height H and width W becomes height W and width H, with
    /// `new[W-1-j][i] = old[i][j]`.
    pub fn rotated(&self) -> Self {
        let (height, width) = (self.height(), self.width());
        let mut grid = Grid::new(height, width);

        for i in 0..height {
            for j in 0..width {
                if let Some(mino) = self.grid.get(i, j) {
                    grid.set(width - 1 - j, i, mino);
                }
            }
        }

        Self { grid }
    }

    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.grid.to_bits(Mino::bit)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for mino in row {
                f.write_str(if mino.is_filled() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_row_into_column() {
        let row = Shape::from_bits(&[[1u8, 1]]).unwrap();
        let column = row.rotated();
        assert_eq!(column.height(), 2);
        assert_eq!(column.width(), 1);
        assert_eq!(column.to_bits(), vec![vec![1], vec![1]]);
    }

    #[test]
    fn rotate_follows_index_mapping() {
        // T pointing up
        let t = Shape::from_bits(&[[0u8, 1, 0], [1, 1, 1]]).unwrap();
        let rotated = t.rotated();
        assert_eq!(rotated.to_bits(), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
    }

    #[test]
    fn display_marks_filled_cells() {
        let s = Shape::from_bits(&[[0u8, 1, 1], [1, 1, 0]]).unwrap();
        assert_eq!(s.to_string(), ".##\n##.\n");
    }

    #[test]
    fn filled_cells_lists_positions() {
        let l = Shape::from_bits(&[[0u8, 0, 1], [1, 1, 1]]).unwrap();
        let cells: Vec<_> = l.filled_cells().collect();
        assert_eq!(cells, vec![(0, 2), (1, 0), (1, 1), (1, 2)]);
    }
}
