//! Snapshot module - plain-data save/restore of a session
//!
//! A snapshot carries exactly what is needed to resume a game: the score, the
//! best score, the field grid, and the shape and position of the current and
//! next figures. Everything else (level, line count) is derived from the score
//! on restore. Grids are stored as 0/1 rows so they serialize compactly.
//!
//! Writing snapshots somewhere is the caller's business; this module only
//! converts between sessions and data.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, SessionConfig};
use crate::core::{Error as CoreError, Field, Figure, Shape};
use crate::session::Session;
use crate::types::{SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FigureSnapshot {
    pub shape: Vec<Vec<u8>>,
    pub x: usize,
    pub y: usize,
}

impl From<&Figure> for FigureSnapshot {
    fn from(figure: &Figure) -> Self {
        Self {
            shape: figure.shape().to_bits(),
            x: figure.x,
            y: figure.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub score: u32,
    pub best_score: u32,
    pub field: Vec<Vec<u8>>,
    pub current: FigureSnapshot,
    pub next: FigureSnapshot,
}

/// Which of the two figures a restore error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureSlot {
    Current,
    Next,
}

impl fmt::Display for FigureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FigureSlot::Current => "current",
            FigureSlot::Next => "next",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("invalid field grid")]
    Field(#[source] CoreError),

    #[error("invalid {slot} figure shape")]
    Shape {
        slot: FigureSlot,
        #[source]
        source: CoreError,
    },

    #[error("{slot} figure has an empty shape")]
    EmptyShape { slot: FigureSlot },

    #[error("{slot} figure does not fit the field")]
    FigureOutOfBounds {
        slot: FigureSlot,
        #[source]
        source: CoreError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn restore_shape(slot: FigureSlot, rows: &[Vec<u8>]) -> Result<Shape, SnapshotError> {
    let shape = Shape::from_bits(rows).map_err(|source| SnapshotError::Shape { slot, source })?;
    if shape.filled_cells().next().is_none() {
        return Err(SnapshotError::EmptyShape { slot });
    }
    Ok(shape)
}

fn ensure_fits(slot: FigureSlot, field: &Field, figure: &Figure) -> Result<(), SnapshotError> {
    field
        .check_collision(figure)
        .map(|_| ())
        .map_err(|source| SnapshotError::FigureOutOfBounds { slot, source })
}

impl Session {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.score(),
            best_score: self.best_score(),
            field: self.field().to_bits(),
            current: self.current().into(),
            next: self.next().into(),
        }
    }

    /// Rebuild a session from a snapshot
    ///
    /// The field dimensions come from the snapshot and override the ones in
    /// `config`; the RNG is reseeded from `config.seed`.
    pub fn restore(config: SessionConfig, snapshot: &GameSnapshot) -> Result<Self, SnapshotError> {
        let field = Field::from_bits(snapshot.field.as_slice()).map_err(SnapshotError::Field)?;
        let config = config.with_size(field.width(), field.height());
        config.validate()?;

        let current = Figure::at(
            restore_shape(FigureSlot::Current, &snapshot.current.shape)?,
            snapshot.current.x,
            snapshot.current.y,
        );
        ensure_fits(FigureSlot::Current, &field, &current)?;

        let next_shape = restore_shape(FigureSlot::Next, &snapshot.next.shape)?;
        // The next figure only matters once promoted to the spawn point
        ensure_fits(
            FigureSlot::Next,
            &field,
            &Figure::at(next_shape.clone(), SPAWN_X, SPAWN_Y),
        )?;
        let next = Figure::at(next_shape, snapshot.next.x, snapshot.next.y);

        Ok(Session::from_parts(
            config,
            field,
            current,
            next,
            snapshot.score,
            snapshot.best_score,
        ))
    }
}
