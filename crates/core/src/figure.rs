//! Figure module - the falling piece
//!
//! A figure is a shape plus the field position of its bounding box's top-left
//! corner. Legality checks run against a speculative clone, so asking whether a
//! move is allowed never touches the figure itself. Only the `*_if_allowed`
//! operators change the position.

use crate::catalog;
use crate::field::Field;
use crate::shape::Shape;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Figure {
    shape: Shape,
    /// Column of the bounding box's left edge
    pub x: usize,
    /// Row of the bounding box's top edge
    pub y: usize,
}

impl Figure {
    /// Create a figure at (0, 0)
    pub fn new(shape: Shape) -> Self {
        Self::at(shape, 0, 0)
    }

    pub fn at(shape: Shape, x: usize, y: usize) -> Self {
        Self { shape, x, y }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Replace the held shape, keeping the position
    pub fn set(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn width(&self) -> usize {
        self.shape.width()
    }

    pub fn height(&self) -> usize {
        self.shape.height()
    }

    /// Local (row, col) of every filled cell
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.shape.filled_cells()
    }

    /// Load the catalog shape for `piece_id` and turn it `rotate_times` times
    ///
    /// Unknown ids load the I piece. The position is left alone.
    pub fn build_new(&mut self, piece_id: i32, rotate_times: u32) {
        self.set(catalog::shape_by_id(piece_id));
        self.rotate_times(rotate_times);
    }

    /// One clockwise quarter turn, without any legality check
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated();
    }

    pub fn rotate_times(&mut self, times: u32) {
        for _ in 0..times {
            self.rotate();
        }
    }

    /// Whether a clone moved to (x, y) stays clear of locked cells
    ///
    /// Positions that leave the grid count as blocked.
    fn is_possible_to_move(&self, field: &Field, x: usize, y: usize) -> bool {
        let mut probe = self.clone();
        probe.x = x;
        probe.y = y;
        matches!(field.check_collision(&probe), Ok(false))
    }

    pub fn is_allowed_to_move_left(&self, field: &Field) -> bool {
        if self.x == 0 {
            return false;
        }
        self.is_possible_to_move(field, self.x - 1, self.y)
    }

    pub fn is_allowed_to_move_right(&self, field: &Field) -> bool {
        if self.x + self.width() >= field.width() {
            return false;
        }
        self.is_possible_to_move(field, self.x + 1, self.y)
    }

    pub fn is_allowed_to_move_down(&self, field: &Field) -> bool {
        if self.y + self.height() >= field.height() {
            return false;
        }
        self.is_possible_to_move(field, self.x, self.y + 1)
    }

    /// Conservative rotation check against the figure's bounding square
    ///
    /// The square of side `max(width, height)` anchored at (x, y) must fit in
    /// the field and contain no locked cell. This rejects some rotations whose
    /// true rotated silhouette would fit; there are no wall kicks.
    pub fn is_allowed_to_rotate(&self, field: &Field) -> bool {
        let full_size = self.width().max(self.height());
        if self.x + full_size > field.width() || self.y + full_size > field.height() {
            return false;
        }

        (self.y..self.y + full_size)
            .all(|y| (self.x..self.x + full_size).all(|x| !field.is_locked(x, y)))
    }

    pub fn move_left_if_allowed(&mut self, field: &Field) -> bool {
        if self.is_allowed_to_move_left(field) {
            self.x -= 1;
            return true;
        }
        false
    }

    pub fn move_right_if_allowed(&mut self, field: &Field) -> bool {
        if self.is_allowed_to_move_right(field) {
            self.x += 1;
            return true;
        }
        false
    }

    pub fn move_down_if_allowed(&mut self, field: &Field) -> bool {
        if self.is_allowed_to_move_down(field) {
            self.y += 1;
            return true;
        }
        false
    }

    pub fn rotate_if_allowed(&mut self, field: &Field) -> bool {
        if self.is_allowed_to_rotate(field) {
            self.rotate();
            return true;
        }
        false
    }

    /// Move down until blocked, returning the number of rows travelled
    pub fn drop_to_floor(&mut self, field: &Field) -> usize {
        let mut rows = 0;
        while self.move_down_if_allowed(field) {
            rows += 1;
        }
        rows
    }
}

impl Default for Figure {
    /// The catalog's default piece at (0, 0)
    fn default() -> Self {
        Self::new(catalog::shape_by_id(0))
    }
}

impl From<Shape> for Figure {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}
