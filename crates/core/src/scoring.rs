//! Scoring module - line-clear points, level and gravity interval
//!
//! All three rules are pure functions of counters the controller keeps:
//! - points per lock come from a fixed table indexed by rows cleared
//! - level is `1 + lines / 10`
//! - the gravity interval shrinks by 30ms per level down to an 80ms floor

use crate::types::{
    BASE_INTERVAL_MS, INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_INTERVAL_MS,
};

/// Points for clearing `rows` rows in a single lock.
///
/// Anything outside the table (more than four rows) scores nothing; a single
/// piece cannot complete more than four rows.
pub fn line_clear_score(rows: usize) -> u32 {
    LINE_SCORES.get(rows).copied().unwrap_or(0)
}

/// Level reached after clearing `lines` lines in total
pub fn level_for_lines(lines: u32) -> u32 {
    1 + lines / LINES_PER_LEVEL
}

/// Gravity tick interval for `level` in milliseconds
pub fn tick_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(INTERVAL_STEP_MS);
    BASE_INTERVAL_MS.saturating_sub(speedup).max(MIN_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 500);
        assert_eq!(line_clear_score(4), 800);
        assert_eq!(line_clear_score(5), 0);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(tick_interval_ms(1), 400);
        assert_eq!(tick_interval_ms(2), 370);
        assert_eq!(tick_interval_ms(5), 280);
        assert_eq!(tick_interval_ms(11), 100);
        assert_eq!(tick_interval_ms(12), 80);
        assert_eq!(tick_interval_ms(13), 80);
        assert_eq!(tick_interval_ms(1000), 80);
    }

    #[test]
    fn test_tick_interval_is_monotonic() {
        let mut prev = tick_interval_ms(1);
        for level in 2..40 {
            let next = tick_interval_ms(level);
            assert!(next <= prev);
            prev = next;
        }
    }
}
