//! Compile-time puzzle configuration.

use std::time::Duration;

use crate::error::{BreachError, BreachResult};

/// The coordinate the player has to type.
pub const TARGET_ANSWER: &str = "18.5204,73.8567";

/// Label appended to every random value before digesting.
pub const DIGEST_SALT: &str = "🌍 Pune Puzzle";

pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 5;

/// Visible characters of each digest cell.
pub const CELL_PREFIX_LEN: usize = 16;
pub const CELL_ELLIPSIS: &str = "...";

pub const GLITCH_LINES: usize = 20;
pub const GLITCH_WIDTH: usize = 80;
pub const GLITCH_PALETTE: &str = "01▓▒░#@$%^&*";

/// How long leaving the page asks for confirmation after a loss.
pub const LEAVE_GUARD_WINDOW: Duration = Duration::from_secs(10);

/// Everything tunable about one puzzle session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub target_answer: String,
    pub salt: String,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub cell_prefix_len: usize,
    pub cell_ellipsis: String,
    pub glitch_lines: usize,
    pub glitch_width: usize,
    pub glitch_palette: String,
    pub leave_guard_window: Duration,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            target_answer: TARGET_ANSWER.to_string(),
            salt: DIGEST_SALT.to_string(),
            grid_rows: GRID_ROWS,
            grid_cols: GRID_COLS,
            cell_prefix_len: CELL_PREFIX_LEN,
            cell_ellipsis: CELL_ELLIPSIS.to_string(),
            glitch_lines: GLITCH_LINES,
            glitch_width: GLITCH_WIDTH,
            glitch_palette: GLITCH_PALETTE.to_string(),
            leave_guard_window: LEAVE_GUARD_WINDOW,
        }
    }
}

impl PuzzleConfig {
    /// Number of digests the grid needs.
    pub fn cell_count(&self) -> usize {
        self.grid_rows * self.grid_cols
    }

    pub fn validate(&self) -> BreachResult<()> {
        if self.target_answer.trim().is_empty() {
            return Err(BreachError::InvalidConfig("target answer is empty".into()));
        }
        if self.target_answer.trim() != self.target_answer {
            return Err(BreachError::InvalidConfig(
                "target answer has surrounding whitespace and can never match".into(),
            ));
        }
        if self.grid_rows == 0 || self.grid_cols == 0 {
            return Err(BreachError::InvalidConfig(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_rows, self.grid_cols
            )));
        }
        if self.cell_prefix_len == 0 {
            return Err(BreachError::InvalidConfig("cell prefix length is zero".into()));
        }
        if self.glitch_lines == 0 || self.glitch_width == 0 {
            return Err(BreachError::InvalidConfig("glitch overlay is empty".into()));
        }
        if self.glitch_palette.is_empty() {
            return Err(BreachError::InvalidConfig("glitch palette is empty".into()));
        }
        if self.leave_guard_window.is_zero() {
            return Err(BreachError::InvalidConfig("leave guard window is zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PuzzleConfig::default();
        config.validate().unwrap();
        assert_eq!(config.cell_count(), 25);
        assert_eq!(config.target_answer, "18.5204,73.8567");
        assert_eq!(config.leave_guard_window, Duration::from_secs(10));
    }

    #[test]
    fn test_rejects_degenerate_values() {
        let cases = [
            PuzzleConfig {
                target_answer: "  ".into(),
                ..Default::default()
            },
            PuzzleConfig {
                target_answer: " 1,2".into(),
                ..Default::default()
            },
            PuzzleConfig {
                grid_rows: 0,
                ..Default::default()
            },
            PuzzleConfig {
                cell_prefix_len: 0,
                ..Default::default()
            },
            PuzzleConfig {
                glitch_width: 0,
                ..Default::default()
            },
            PuzzleConfig {
                glitch_palette: String::new(),
                ..Default::default()
            },
            PuzzleConfig {
                leave_guard_window: Duration::ZERO,
                ..Default::default()
            },
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(BreachError::InvalidConfig(_))),
                "expected rejection for {:?}",
                config
            );
        }
    }
}
