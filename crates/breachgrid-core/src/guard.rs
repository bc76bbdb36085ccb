//! Leave-confirmation window after a loss.

use std::time::Duration;

use web_time::Instant;

use crate::config::LEAVE_GUARD_WINDOW;

/// Tracks whether leaving the page should still ask for confirmation.
///
/// Armed once when the session is lost, then active for exactly `window`.
/// The browser timer that tears down the unload handler may fire late, so
/// the handler also asks the guard before prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveGuard {
    armed_at: Option<Instant>,
    window: Duration,
}

impl Default for LeaveGuard {
    fn default() -> Self {
        Self::new(LEAVE_GUARD_WINDOW)
    }
}

impl LeaveGuard {
    pub fn new(window: Duration) -> Self {
        Self {
            armed_at: None,
            window,
        }
    }

    /// Start the window at `now`. Re-arming keeps the first instant.
    pub fn arm(&mut self, now: Instant) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// True from the arming instant until `window` has elapsed.
    pub fn is_active(&self, now: Instant) -> bool {
        match self.armed_at {
            Some(armed_at) => now.saturating_duration_since(armed_at) < self.window,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_until_armed() {
        let guard = LeaveGuard::default();
        assert!(!guard.is_armed());
        assert!(!guard.is_active(Instant::now()));
    }

    #[test]
    fn test_window_boundaries() {
        let mut guard = LeaveGuard::default();
        let t0 = Instant::now();
        guard.arm(t0);

        assert!(guard.is_active(t0));
        assert!(guard.is_active(t0 + Duration::from_millis(9_999)));
        assert!(!guard.is_active(t0 + Duration::from_secs(10)));
        assert!(!guard.is_active(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn test_rearm_keeps_first_instant() {
        let mut guard = LeaveGuard::default();
        let t0 = Instant::now();
        guard.arm(t0);
        guard.arm(t0 + Duration::from_secs(8));

        assert!(!guard.is_active(t0 + Duration::from_secs(10)));
    }
}
