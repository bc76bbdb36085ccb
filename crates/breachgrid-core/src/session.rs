//! The one-guess session state machine.

use web_time::Instant;

use crate::config::PuzzleConfig;
use crate::error::{BreachError, BreachResult};
use crate::guard::LeaveGuard;
use crate::phase::Phase;

/// Outcome of comparing a guess with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
}

impl Verdict {
    pub fn phase(&self) -> Phase {
        match self {
            Verdict::Match => Phase::Win,
            Verdict::Mismatch => Phase::Lose,
        }
    }
}

/// Drop surrounding whitespace, including the byte-order mark that browser
/// `String.prototype.trim` also strips.
pub fn trim_guess(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Compare a raw guess with the target.
///
/// Only surrounding whitespace is dropped. Case, inner spacing and numeric
/// precision must match byte for byte.
pub fn evaluate_guess(input: &str, target: &str) -> Verdict {
    if trim_guess(input) == target {
        Verdict::Match
    } else {
        Verdict::Mismatch
    }
}

/// One page load worth of puzzle state.
#[derive(Debug, Clone)]
pub struct Session {
    config: PuzzleConfig,
    phase: Phase,
    input: String,
    leave_guard: LeaveGuard,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PuzzleConfig::default())
    }
}

impl Session {
    pub fn new(config: PuzzleConfig) -> Self {
        let leave_guard = LeaveGuard::new(config.leave_guard_window);
        Self {
            config,
            phase: Phase::Start,
            input: String::new(),
            leave_guard,
        }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn leave_guard(&self) -> &LeaveGuard {
        &self.leave_guard
    }

    /// Whether leaving the page should prompt at `now`.
    pub fn leave_guard_active(&self, now: Instant) -> bool {
        self.leave_guard.is_active(now)
    }

    /// Replace the typed text. Ignored once the session is resolved.
    ///
    /// Returns whether the edit was accepted.
    pub fn set_input(&mut self, text: impl Into<String>) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        self.input = text.into();
        true
    }

    /// Evaluate the current input and move to a terminal phase.
    ///
    /// Only a truly empty field is refused; a whitespace-only guess is a
    /// guess and loses. A mismatch arms the leave guard at `now`.
    pub fn submit(&mut self, now: Instant) -> BreachResult<Phase> {
        if self.phase.is_terminal() {
            return Err(BreachError::AlreadyResolved(self.phase));
        }
        if self.input.is_empty() {
            return Err(BreachError::EmptyGuess);
        }

        let verdict = evaluate_guess(&self.input, &self.config.target_answer);
        let next = verdict.phase();
        debug_assert!(self.phase.can_transition_to(next));
        self.phase = next;

        if verdict == Verdict::Mismatch {
            self.leave_guard.arm(now);
        }

        tracing::info!(
            phase = %self.phase,
            guess_len = trim_guess(&self.input).len(),
            "guess evaluated"
        );
        Ok(self.phase)
    }
}
