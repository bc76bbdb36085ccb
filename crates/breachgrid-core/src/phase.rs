//! Session phases and the live phase cell shared with event listeners.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Where the session currently stands.
///
/// `Start` is the only phase that accepts a guess. `Win` and `Lose` are
/// terminal: nothing moves a session out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Start,
    Win,
    Lose,
}

impl Phase {
    /// Lowercase label used in logs and CSS classes.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Win => "win",
            Phase::Lose => "lose",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Start)
    }

    /// Whether a transition from `self` to `next` is allowed.
    pub fn can_transition_to(&self, next: Phase) -> bool {
        matches!((self, next), (Phase::Start, Phase::Win | Phase::Lose))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shared view of the current phase for callbacks registered outside the
/// render cycle.
///
/// Browser listeners are registered once and live for the whole session, so
/// they must read the phase through this cell instead of capturing a copy.
/// Whoever mutates the session updates the cell in the same turn.
#[derive(Debug, Clone, Default)]
pub struct LivePhase(Rc<Cell<Phase>>);

impl LivePhase {
    pub fn new(phase: Phase) -> Self {
        Self(Rc::new(Cell::new(phase)))
    }

    pub fn get(&self) -> Phase {
        self.0.get()
    }

    pub fn set(&self, phase: Phase) {
        self.0.set(phase);
    }
}
