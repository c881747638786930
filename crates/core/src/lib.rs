//! Core rules module - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game and nothing else.
//! It has **no** dependencies on rendering, input, timing or storage:
//!
//! - **Deterministic**: every operation is a pure function of in-memory state
//! - **Total where play needs it**: blocked moves are `false`, unknown piece
//!   ids load a default shape
//! - **Strict where callers err**: figures outside the grid are reported as
//!   [`Error::OutOfBounds`] instead of being clamped
//!
//! # Module Structure
//!
//! - [`field`]: the grid of locked cells with collision, merge and line removal
//! - [`figure`]: the falling piece with movement and rotation legality checks
//! - [`shape`]: immutable piece occupancy matrices and quarter-turn rotation
//! - [`catalog`]: the seven canonical tetrominoes by id
//! - [`grid`]: row-major storage shared by fields and shapes
//! - [`rng`]: seeded uniform random source for piece selection
//!
//! # Example
//!
//! ```
//! use bricks_core::{Field, Figure};
//!
//! let mut field = Field::new(10, 20);
//! let mut figure = Figure::default();
//! figure.build_new(3, 0); // O piece
//! figure.x = 3;
//!
//! assert!(figure.move_left_if_allowed(&field));
//! while figure.move_down_if_allowed(&field) {}
//!
//! field.merge(&figure).unwrap();
//! assert_eq!(field.remove_full_lines(), 0);
//! assert!(field.is_locked(2, 19));
//! ```

pub mod catalog;
pub mod error;
pub mod field;
pub mod figure;
pub mod grid;
pub mod rng;
pub mod shape;

pub use bricks_types as types;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use field::Field;
pub use figure::Figure;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use shape::Shape;
