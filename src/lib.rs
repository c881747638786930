//! Bricks (workspace facade crate).
//!
//! Exposes `bricks::{core, engine, types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use bricks_core as core;
pub use bricks_engine as engine;
pub use bricks_types as types;
