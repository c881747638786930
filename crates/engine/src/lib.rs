//! Session driver - runs the rules core one discrete step at a time
//!
//! The core crate only knows fields and figures. This crate adds what a
//! playable game needs around them, without tying it to any frontend:
//!
//! - [`session`]: the per-step driver (intents, gravity, locking, game over)
//! - [`scoring`]: score, level and gravity interval rules
//! - [`snapshot`]: plain-data save/restore of a running session
//! - [`config`]: session configuration with environment overrides
//!
//! Frontends own the clock, input mapping, rendering and storage. They call
//! [`Session::tick`] (or [`Session::step`]) with the intents collected since
//! the last call and draw whatever the session exposes afterwards.
//!
//! # Example
//!
//! ```
//! use bricks_engine::{Session, SessionConfig};
//! use bricks_types::Intent;
//!
//! let mut session = Session::new(SessionConfig::default().with_seed(7)).unwrap();
//! let outcome = session.step(&[Intent::HardDrop]).unwrap();
//! assert!(outcome.locked);
//! assert_eq!(session.score(), 0);
//!
//! let saved = session.snapshot();
//! let restored = Session::restore(SessionConfig::default(), &saved).unwrap();
//! assert_eq!(restored.field(), session.field());
//! ```

pub mod config;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use bricks_core as core;
pub use bricks_types as types;

pub use config::{ConfigError, SessionConfig};
pub use session::{Intents, Session, StepOutcome, MAX_INTENTS_PER_STEP};
pub use snapshot::{FigureSlot, FigureSnapshot, GameSnapshot, SnapshotError};
