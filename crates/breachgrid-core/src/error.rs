//! Error types for Breachgrid

use thiserror::Error;

use crate::phase::Phase;

/// Browser capabilities requested through a permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Fullscreen,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Fullscreen => f.write_str("fullscreen"),
        }
    }
}

/// Main error type for Breachgrid operations
#[derive(Error, Debug)]
pub enum BreachError {
    /// Guess field was empty
    #[error("Guess is empty")]
    EmptyGuess,

    /// The session already reached a terminal phase
    #[error("Session already resolved: {0}")]
    AlreadyResolved(Phase),

    /// The digest facility is missing or failed
    #[error("Digest unavailable: {0}")]
    DigestUnavailable(String),

    /// A best-effort browser capability was refused
    #[error("Capability {capability} denied: {reason}")]
    Capability {
        capability: Capability,
        reason: String,
    },

    /// Configuration values out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl BreachError {
    /// Shorthand for a refused browser capability.
    pub fn capability(capability: Capability, reason: impl Into<String>) -> Self {
        BreachError::Capability {
            capability,
            reason: reason.into(),
        }
    }

    /// Whether this error is a soft capability failure that callers swallow.
    pub fn is_capability_denial(&self) -> bool {
        matches!(
            self,
            BreachError::Capability { .. } | BreachError::DigestUnavailable(_)
        )
    }
}

/// Result type alias using BreachError
pub type BreachResult<T> = Result<T, BreachError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BreachError::AlreadyResolved(Phase::Lose);
        assert_eq!(format!("{}", err), "Session already resolved: lose");

        let err = BreachError::capability(Capability::Fullscreen, "not allowed");
        assert_eq!(format!("{}", err), "Capability fullscreen denied: not allowed");
    }

    #[test]
    fn test_capability_denial_classification() {
        assert!(BreachError::DigestUnavailable("no subtle".into()).is_capability_denial());
        assert!(BreachError::capability(Capability::Fullscreen, "x").is_capability_denial());
        assert!(!BreachError::EmptyGuess.is_capability_denial());
        assert!(!BreachError::InvalidConfig("rows".into()).is_capability_denial());
    }
}
