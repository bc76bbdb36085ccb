//! Which keystrokes the page swallows.
//!
//! These are deterrents, not a boundary: anyone can open devtools from the
//! browser menu.

use crate::phase::Phase;

/// The parts of a keydown event the policy looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    /// `KeyboardEvent.key`, e.g. `"u"`, `"F12"`, `"Escape"`.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Ctrl+U / Cmd+U.
    pub fn is_view_source(&self) -> bool {
        (self.ctrl || self.meta) && self.key.eq_ignore_ascii_case("u")
    }

    pub fn is_devtools(&self) -> bool {
        self.key == "F12"
    }
}

/// Why a key was suppressed, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    ViewSource,
    Devtools,
    LockedOut,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPolicy;

impl KeyPolicy {
    /// Decide against the phase as it is right now.
    pub fn classify(&self, chord: &KeyChord, phase: Phase) -> Option<Suppression> {
        if chord.is_view_source() {
            Some(Suppression::ViewSource)
        } else if chord.is_devtools() {
            Some(Suppression::Devtools)
        } else if phase == Phase::Lose {
            Some(Suppression::LockedOut)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(key: &str) -> KeyChord {
        KeyChord {
            ctrl: true,
            ..KeyChord::new(key)
        }
    }

    fn meta(key: &str) -> KeyChord {
        KeyChord {
            meta: true,
            ..KeyChord::new(key)
        }
    }

    #[test]
    fn test_view_source_and_devtools_always_blocked() {
        let policy = KeyPolicy;
        for phase in [Phase::Start, Phase::Win, Phase::Lose] {
            assert!(policy.classify(&ctrl("u"), phase).is_some());
            assert!(policy.classify(&KeyChord { shift: true, ..ctrl("U") }, phase).is_some());
            assert!(policy.classify(&meta("u"), phase).is_some());
            assert!(policy.classify(&KeyChord::new("F12"), phase).is_some());
        }
    }

    #[test]
    fn test_ordinary_typing_allowed_before_loss() {
        let policy = KeyPolicy;
        for key in ["1", "8", ".", ",", "u", "Backspace", "Enter"] {
            assert!(policy.classify(&KeyChord::new(key), Phase::Start).is_none());
            assert!(policy.classify(&KeyChord::new(key), Phase::Win).is_none());
        }
    }

    #[test]
    fn test_everything_blocked_after_loss() {
        let policy = KeyPolicy;
        for key in ["a", "Escape", "F5", "Tab", "Enter"] {
            assert_eq!(
                policy.classify(&KeyChord::new(key), Phase::Lose),
                Some(Suppression::LockedOut)
            );
        }
    }
}
