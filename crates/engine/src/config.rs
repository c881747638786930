//! Session configuration
//!
//! Configure a session using environment variables:
//!
//! - `BRICKS_FIELD_WIDTH`: Field columns (default: 10)
//! - `BRICKS_FIELD_HEIGHT`: Field rows (default: 20)
//! - `BRICKS_SEED`: RNG seed (default: 1)
//! - `BRICKS_START_INTERVAL_MS`: Gravity interval at level 1 (default: 800)
//! - `BRICKS_INTERVAL_STEP_MS`: Interval change per level (default: -60)

use std::env;
use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::types::{
    DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DEFAULT_INTERVAL_STEP_MS,
    DEFAULT_START_INTERVAL_MS, MAX_PIECE_SIZE, SPAWN_X, SPAWN_Y,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field of {width}x{height} is smaller than {min_width}x{min_height}")]
    FieldTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },

    #[error("start interval must be positive")]
    ZeroStartInterval,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u32,
    pub start_interval_ms: u32,
    pub interval_step_ms: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            seed: 1,
            start_interval_ms: DEFAULT_START_INTERVAL_MS,
            interval_step_ms: DEFAULT_INTERVAL_STEP_MS,
        }
    }
}

/// Parse `name` from the environment, keeping `default` when unset or invalid
fn env_or<T: FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("ignoring {}={:?}: not a valid value", name, raw);
                default
            }
        },
        Err(_) => default,
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            width: env_or("BRICKS_FIELD_WIDTH", defaults.width),
            height: env_or("BRICKS_FIELD_HEIGHT", defaults.height),
            seed: env_or("BRICKS_SEED", defaults.seed),
            start_interval_ms: env_or("BRICKS_START_INTERVAL_MS", defaults.start_interval_ms),
            interval_step_ms: env_or("BRICKS_INTERVAL_STEP_MS", defaults.interval_step_ms),
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Smallest field that fits any catalog piece, in any orientation, at spawn
    pub fn min_size() -> (usize, usize) {
        (SPAWN_X + MAX_PIECE_SIZE, SPAWN_Y + MAX_PIECE_SIZE)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min_width, min_height) = Self::min_size();
        if self.width < min_width || self.height < min_height {
            return Err(ConfigError::FieldTooSmall {
                width: self.width,
                height: self.height,
                min_width,
                min_height,
            });
        }
        if self.start_interval_ms == 0 {
            return Err(ConfigError::ZeroStartInterval);
        }
        Ok(())
    }
}
