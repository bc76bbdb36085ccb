//! Session context for Breachgrid.
//!
//! Provides the puzzle session and the environment lock to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let game = provide_game();
//!
//! // In child components
//! let game = use_game();
//! game.submit();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use breachgrid_core::{LivePhase, Phase, Session};
use dioxus::prelude::*;
use web_time::Instant;

use crate::environment::SessionLock;

/// Lock slot shared between the mount effect, the submit handler and
/// teardown.
pub type SharedLock = Rc<RefCell<Option<SessionLock>>>;

/// Everything a page needs to drive the session.
#[derive(Clone)]
pub struct GameHandle {
    pub session: Signal<Session>,
    live_phase: LivePhase,
    lock: SharedLock,
}

impl GameHandle {
    pub fn phase(&self) -> Phase {
        self.session.read().phase()
    }

    /// Record a keystroke's worth of input.
    pub fn set_input(&self, text: String) {
        let mut session = self.session;
        session.write().set_input(text);
    }

    /// Evaluate the current guess and react to the outcome.
    ///
    /// The live phase is updated in the same turn as the session so the
    /// keydown listener never lags behind.
    pub fn submit(&self) {
        let mut session = self.session;
        let result = session.write().submit(Instant::now());

        match result {
            Ok(phase) => {
                self.live_phase.set(phase);
                if phase == Phase::Lose {
                    let guard = *session.peek().leave_guard();
                    if let Some(lock) = self.lock.borrow().as_ref() {
                        lock.engage_loss(guard);
                    }
                }
            }
            Err(err) => {
                tracing::debug!(%err, "submission ignored");
            }
        }
    }
}

/// Create the session, engage the environment lock after mount, and release
/// it on unmount. Call once, in the root component.
pub fn provide_game() -> GameHandle {
    let session = use_signal(Session::default);
    let live_phase = use_hook(|| LivePhase::new(Phase::Start));
    let lock: SharedLock = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let lock = lock.clone();
        let live_phase = live_phase.clone();
        move || {
            let mut slot = lock.borrow_mut();
            if slot.is_none() {
                *slot = Some(SessionLock::engage(live_phase.clone()));
            }
        }
    });

    use_drop({
        let lock = lock.clone();
        move || {
            lock.borrow_mut().take();
        }
    });

    use_context_provider(|| GameHandle {
        session,
        live_phase,
        lock,
    })
}

/// Hook to access the game from context.
pub fn use_game() -> GameHandle {
    use_context::<GameHandle>()
}
