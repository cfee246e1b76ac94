//! Scoring module - line clear points, levels and gravity speed
//!
//! - 1/2/3/4 lines score 40/100/300/1200 times the current level.
//! - The level is `lines / 10 + 1` and only ever goes up within a game.
//! - The fall interval shrinks as `base / (1 + (level - 1) * 0.1)`; it is only
//!   recomputed when the level actually rises.

use crate::types::{BASE_FALL_INTERVAL_SECS, FALL_SPEEDUP_PER_LEVEL, LINES_PER_LEVEL, LINE_SCORES};

/// Result of applying one placement's line clears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub lines_cleared: u32,
    pub points: u32,
    pub level_up: bool,
}

/// Score, level, cumulative lines and the current fall interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreState {
    score: u32,
    level: u32,
    lines: u32,
    fall_interval: f64,
}

impl ScoreState {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            fall_interval: BASE_FALL_INTERVAL_SECS,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Seconds between automatic descents
    pub fn fall_interval(&self) -> f64 {
        self.fall_interval
    }

    /// Account for `cleared` lines removed by a single placement
    pub fn apply_clear(&mut self, cleared: u32) -> ScoreResult {
        if cleared == 0 {
            return ScoreResult::default();
        }

        self.lines += cleared;
        let points = calculate_line_score(cleared, self.level);
        self.score = self.score.saturating_add(points);

        let new_level = calculate_level(self.lines);
        let level_up = new_level > self.level;
        if level_up {
            self.level = new_level;
            self.fall_interval = fall_interval_secs(self.level);
        }

        ScoreResult {
            lines_cleared: cleared,
            points,
            level_up,
        }
    }

    /// Back to level 1 with nothing scored
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate line clear score
/// lines: number of lines cleared by one placement (1-4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines as usize - 1].saturating_mul(level)
}

/// Level for a cumulative line count
/// Level increases every 10 lines cleared, starting at 1
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Fall interval in seconds for a level
pub fn fall_interval_secs(level: u32) -> f64 {
    let steps = level.saturating_sub(1) as f64;
    BASE_FALL_INTERVAL_SECS / (1.0 + steps * FALL_SPEEDUP_PER_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        // Level 1
        assert_eq!(calculate_line_score(1, 1), 40);
        assert_eq!(calculate_line_score(2, 1), 100);
        assert_eq!(calculate_line_score(3, 1), 300);
        assert_eq!(calculate_line_score(4, 1), 1200);

        // Level 5
        assert_eq!(calculate_line_score(1, 5), 40 * 5);
        assert_eq!(calculate_line_score(4, 5), 1200 * 5);

        // Four lines are worth exactly 30 singles.
        assert_eq!(calculate_line_score(4, 3), 30 * calculate_line_score(1, 3));

        assert_eq!(calculate_line_score(0, 3), 0);
        assert_eq!(calculate_line_score(5, 3), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(29), 3);
        assert_eq!(calculate_level(100), 11);
    }

    #[test]
    fn test_fall_intervals() {
        assert_eq!(fall_interval_secs(1), 1.0);
        assert!((fall_interval_secs(2) - 1.0 / 1.1).abs() < 1e-12);
        assert!((fall_interval_secs(11) - 0.5).abs() < 1e-12);
        assert!(fall_interval_secs(1000) > 0.0);

        let mut prev = fall_interval_secs(1);
        for level in 2..50 {
            let next = fall_interval_secs(level);
            assert!(next < prev, "level {}", level);
            prev = next;
        }
    }

    #[test]
    fn test_apply_clear_no_lines() {
        let mut state = ScoreState::new();
        assert_eq!(state.apply_clear(0), ScoreResult::default());
        assert_eq!(state, ScoreState::new());
    }

    #[test]
    fn test_apply_clear_uses_level_before_level_up() {
        let mut state = ScoreState::new();
        state.lines = 8;

        // 8 + 4 = 12 lines crosses into level 2; the tetris still scores at level 1.
        let result = state.apply_clear(4);
        assert_eq!(result.points, 1200);
        assert!(result.level_up);
        assert_eq!(state.level(), 2);
        assert_eq!(state.lines(), 12);
        assert_eq!(state.score(), 1200);
        assert!((state.fall_interval() - 1.0 / 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_interval_unchanged_without_level_up() {
        let mut state = ScoreState::new();
        let before = state.fall_interval();
        for _ in 0..9 {
            assert!(!state.apply_clear(1).level_up);
        }
        assert_eq!(state.fall_interval(), before);
        assert!(state.apply_clear(1).level_up);
        assert!(state.fall_interval() < before);
    }

    #[test]
    fn test_reset() {
        let mut state = ScoreState::new();
        for _ in 0..5 {
            state.apply_clear(4);
        }
        assert_eq!(state.level(), 3);
        state.reset();
        assert_eq!(state, ScoreState::new());
    }
}
