//! Scoring module - score, level and gravity speed
//!
//! Every removed line is worth a flat amount regardless of how many lines go
//! at once. Levels follow score, and the gravity interval follows the level.

use crate::types::{DROP_INTERVAL_MIN_MS, POINTS_PER_LEVEL, POINTS_PER_LINE};

/// Points for removing `lines` lines in one lock
pub fn calculate_line_score(lines: usize) -> u32 {
    POINTS_PER_LINE.saturating_mul(lines as u32)
}

/// Level for a score; the first level is 1
pub fn calculate_level(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Gravity interval for a level (in milliseconds)
///
/// `start_ms + step_ms * (level - 1)`, clamped to the floor.
pub fn get_drop_interval_ms(level: u32, start_ms: u32, step_ms: i32) -> u32 {
    let steps = i64::from(level.saturating_sub(1));
    let interval = i64::from(start_ms) + i64::from(step_ms) * steps;
    interval.clamp(i64::from(DROP_INTERVAL_MIN_MS), i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_are_flat() {
        assert_eq!(calculate_line_score(0), 0);
        assert_eq!(calculate_line_score(1), 10);
        assert_eq!(calculate_line_score(4), 40);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(99), 1);
        assert_eq!(calculate_level(100), 2);
        assert_eq!(calculate_level(250), 3);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(get_drop_interval_ms(1, 800, -60), 800);
        assert_eq!(get_drop_interval_ms(2, 800, -60), 740);
        assert_eq!(get_drop_interval_ms(12, 800, -60), 140);
        assert_eq!(get_drop_interval_ms(40, 800, -60), DROP_INTERVAL_MIN_MS); // Floor
    }

    #[test]
    fn test_positive_step_slows_down() {
        assert_eq!(get_drop_interval_ms(3, 500, 100), 700);
    }

    #[test]
    fn test_level_zero_behaves_like_first_level() {
        assert_eq!(get_drop_interval_ms(0, 800, -60), 800);
    }
}
