//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the rules core, the session driver, and any frontend alike.
//!
//! # Field Dimensions
//!
//! Default playfield:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (3, 0), top-left corner of the piece bounding box
//!
//! # Scoring and Speed
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_LINE` | 10 | Score added per removed line |
//! | `POINTS_PER_LEVEL` | 100 | Score needed to advance one level |
//! | `DEFAULT_START_INTERVAL_MS` | 800 | Gravity interval at level 1 |
//! | `DEFAULT_INTERVAL_STEP_MS` | -60 | Interval change per level |
//! | `DROP_INTERVAL_MIN_MS` | 50 | Gravity interval floor |
//!
//! # Examples
//!
//! ```
//! use bricks_types::{Cell, Intent, PieceKind, DEFAULT_FIELD_WIDTH};
//!
//! assert_eq!(PieceKind::from_id(3), PieceKind::O);
//! assert_eq!(PieceKind::from_id(42), PieceKind::I);
//!
//! assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
//! assert_eq!(Cell::from_bit(1), Some(Cell::Locked));
//! assert_eq!(DEFAULT_FIELD_WIDTH, 10);
//! ```

/// Default field width in cells
pub const DEFAULT_FIELD_WIDTH: usize = 10;

/// Default field height in cells
pub const DEFAULT_FIELD_HEIGHT: usize = 20;

/// Column where a freshly promoted figure is placed
pub const SPAWN_X: usize = 3;

/// Row where a freshly promoted figure is placed
pub const SPAWN_Y: usize = 0;

/// Number of pieces in the catalog
pub const PIECE_COUNT: usize = 7;

/// Number of distinct quarter-turn orientations
pub const ROTATION_STATES: usize = 4;

/// Largest bounding-box side of any catalog piece in any orientation
pub const MAX_PIECE_SIZE: usize = 4;

/// Score awarded per removed line
pub const POINTS_PER_LINE: u32 = 10;

/// Score required per level
pub const POINTS_PER_LEVEL: u32 = 100;

/// Gravity interval at level 1 in milliseconds
pub const DEFAULT_START_INTERVAL_MS: u32 = 800;

/// Gravity interval change per level (negative speeds the game up)
pub const DEFAULT_INTERVAL_STEP_MS: i32 = -60;

/// Gravity interval never drops below this
pub const DROP_INTERVAL_MIN_MS: u32 = 50;

/// A cell of the field
///
/// Persisted numerically: `0` is [`Cell::Empty`], `1` is [`Cell::Locked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Locked,
}

impl Cell {
    /// Decode from the persisted numeric form
    ///
    /// ```
    /// use bricks_types::Cell;
    ///
    /// assert_eq!(Cell::from_bit(0), Some(Cell::Empty));
    /// assert_eq!(Cell::from_bit(2), None);
    /// ```
    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Locked),
            _ => None,
        }
    }

    pub fn bit(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Locked => 1,
        }
    }

    pub fn is_locked(self) -> bool {
        self == Cell::Locked
    }
}

/// A cell of a piece shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mino {
    #[default]
    Absent,
    Filled,
}

impl Mino {
    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Mino::Absent),
            1 => Some(Mino::Filled),
            _ => None,
        }
    }

    pub fn bit(self) -> u8 {
        match self {
            Mino::Absent => 0,
            Mino::Filled => 1,
        }
    }

    pub fn is_filled(self) -> bool {
        self == Mino::Filled
    }
}

/// The seven tetromino kinds, in catalog order
///
/// Catalog ids: I=0, J=1, L=2, O=3, S=4, T=5, Z=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Map a catalog id to a kind
    ///
    /// Ids outside `0..7` map to [`PieceKind::I`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bricks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(0), PieceKind::I);
    /// assert_eq!(PieceKind::from_id(6), PieceKind::Z);
    /// assert_eq!(PieceKind::from_id(-1), PieceKind::I);
    /// assert_eq!(PieceKind::from_id(7), PieceKind::I);
    /// ```
    pub fn from_id(id: i32) -> Self {
        usize::try_from(id)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .unwrap_or(PieceKind::I)
    }

    pub fn id(self) -> i32 {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }
}

/// Player intents consumed by the session driver once per step
///
/// Intents are requests, not commands: each one is applied only if the
/// current figure is allowed to make that move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Shift the figure one column left
    MoveLeft,
    /// Shift the figure one column right
    MoveRight,
    /// Move the figure one row down
    SoftDrop,
    /// Move the figure down as far as it can go
    HardDrop,
    /// Quarter turn clockwise
    Rotate,
}

impl Intent {
    /// Parse intent from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bricks_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("softDrop"), Some(Intent::SoftDrop));
    /// assert_eq!(Intent::from_str("ROTATE"), Some(Intent::Rotate));
    /// assert_eq!(Intent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "harddrop" => Some(Intent::HardDrop),
            "rotate" => Some(Intent::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::HardDrop => "hardDrop",
            Intent::Rotate => "rotate",
        }
    }
}
