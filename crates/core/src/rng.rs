//! RNG module - deterministic uniform random source
//!
//! Piece selection only needs a uniform draw over catalog ids and rotation
//! counts, so a small LCG is enough. Seeding makes whole sessions reproducible.

use crate::types::{PIECE_COUNT, ROTATION_STATES};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max); 0 when `max` is 0
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Low bits of an LCG cycle with short periods
        (self.next_u32() >> 16) % max
    }

    /// Random catalog id and rotation count for a new figure
    pub fn next_piece(&mut self) -> (i32, u32) {
        let id = self.next_range(PIECE_COUNT as u32) as i32;
        let rotations = self.next_range(ROTATION_STATES as u32);
        (id, rotations)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
