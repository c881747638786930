//! Field module - the grid of settled blocks
//!
//! The field is a fixed-size grid where each cell is either empty or locked.
//! Coordinates: x is the column (left to right), y is the row (top to bottom).
//!
//! The grid is only mutated by [`Field::merge`], [`Field::remove_full_lines`]
//! and [`Field::reset`]. The field never holds on to a figure.

use std::fmt;

use crate::error::{Error, Result};
use crate::figure::Figure;
use crate::grid::Grid;
use crate::types::{Cell, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    map: Grid<Cell>,
}

impl Field {
    /// Create an all-empty field
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            map: Grid::new(width, height),
        }
    }

    /// Adopt an existing grid; dimensions come from the grid
    pub fn from_grid(map: Grid<Cell>) -> Self {
        Self { map }
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        Grid::from_rows(rows).map(Self::from_grid)
    }

    /// Build from persisted 0/1 rows
    ///
    /// ```
    /// use bricks_core::Field;
    ///
    /// let field = Field::from_bits(&[[0u8, 0, 0], [1, 0, 1]]).unwrap();
    /// assert_eq!(field.width(), 3);
    /// assert_eq!(field.height(), 2);
    /// assert!(field.is_locked(2, 1));
    /// ```
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        Grid::from_bits(rows, Cell::from_bit).map(Self::from_grid)
    }

    pub fn width(&self) -> usize {
        self.map.width()
    }

    pub fn height(&self) -> usize {
        self.map.height()
    }

    pub fn map(&self) -> &Grid<Cell> {
        &self.map
    }

    /// Get cell at column x, row y. Returns None if out of bounds
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.map.get(y, x)
    }

    /// Check if position is within bounds and locked
    pub fn is_locked(&self, x: usize, y: usize) -> bool {
        matches!(self.cell(x, y), Some(Cell::Locked))
    }

    /// Check if a row is completely locked
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height() && self.map.row(y).iter().all(|cell| cell.is_locked())
    }

    /// Fail unless the figure's bounding box lies inside the grid
    fn ensure_contains(&self, figure: &Figure) -> Result<()> {
        let fits = figure.x + figure.width() <= self.width()
            && figure.y + figure.height() <= self.height();
        if fits {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x: figure.x,
                y: figure.y,
                width: figure.width(),
                height: figure.height(),
                field_width: self.width(),
                field_height: self.height(),
            })
        }
    }

    /// Check whether any filled cell of the figure overlaps a locked cell
    ///
    /// The figure's bounding box must lie inside the grid, otherwise
    /// [`Error::OutOfBounds`] is returned.
    pub fn check_collision(&self, figure: &Figure) -> Result<bool> {
        self.ensure_contains(figure)?;
        Ok(figure
            .filled_cells()
            .any(|(i, j)| self.is_locked(figure.x + j, figure.y + i)))
    }

    /// Lock every filled cell of the figure into the field
    ///
    /// Bounds are checked before anything is written, so the merge either
    /// applies completely or not at all.
    pub fn merge(&mut self, figure: &Figure) -> Result<()> {
        self.ensure_contains(figure)?;
        for (i, j) in figure.filled_cells() {
            self.map.set(figure.y + i, figure.x + j, Cell::Locked);
        }
        Ok(())
    }

    /// Indices of full rows, bottom to top, as they are before any removal
    pub fn full_lines(&self) -> Vec<usize> {
        (0..self.height())
            .rev()
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove all full rows and return how many were removed
    ///
    /// Full rows are collected bottom to top up front. Removing a row shifts
    /// every row above it down by one, so each pending index is corrected by
    /// the number of rows already removed beneath it.
    pub fn remove_full_lines(&mut self) -> usize {
        let lines = self.full_lines();
        for (removed, &line) in lines.iter().enumerate() {
            self.map.drop_row(line + removed);
        }
        lines.len()
    }

    /// Clear the entire field, keeping its dimensions
    pub fn reset(&mut self) {
        self.map.clear();
    }

    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.map.to_bits(Cell::bit)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.map.rows() {
            for cell in row {
                f.write_str(if cell.is_locked() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
