//! Grid module - fixed-size row-major cell storage
//!
//! Shared by the field (locked cells) and by piece shapes (filled cells).
//! Coordinates are `(row, col)` with row 0 at the top.

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    /// Flat storage, row-major order (row * width + col)
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid filled with `T::default()`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }

    /// Build from nested rows; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build from persisted numeric rows, decoding each value with `decode`
    pub fn from_bits<R: AsRef<[u8]>>(
        rows: &[R],
        decode: impl Fn(u8) -> Option<T>,
    ) -> Result<Self> {
        let decoded = rows
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .as_ref()
                    .iter()
                    .enumerate()
                    .map(|(col, &value)| {
                        decode(value).ok_or(Error::InvalidCell { row, col, value })
                    })
                    .collect::<Result<Vec<T>>>()
            })
            .collect::<Result<Vec<Vec<T>>>>()?;
        Self::from_rows(decoded)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Get cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Cells of one row
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).map(move |row| self.row(row))
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Encode every cell with `encode`, row by row
    pub fn to_bits(&self, encode: impl Fn(T) -> u8) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&cell| encode(cell)).collect())
            .collect()
    }

    /// Shift rows `0..row` down by one, dropping `row` and opening an
    /// all-default row at the top
    pub(crate) fn drop_row(&mut self, row: usize) {
        if row >= self.height {
            return;
        }
        let width = self.width;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(T::default());
    }

    /// Reset every cell to `T::default()`
    pub fn clear(&mut self) {
        self.cells.fill(T::default());
    }
}
