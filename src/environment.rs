//! Browser environment lock.
//!
//! Soft deterrents around the puzzle page: fullscreen, no context menu, no
//! view-source/devtools shortcuts, and after a loss every key plus a
//! temporary leave-confirmation prompt. All of it is best-effort; a refused
//! capability is logged and the page carries on.
//!
//! Listeners are owned as [`EventListener`] values, so dropping a lock
//! detaches exactly the handlers it registered.

use std::cell::RefCell;
use std::rc::Rc;

use breachgrid_core::{BreachError, BreachResult, Capability, KeyChord, KeyPolicy, LeaveGuard, LivePhase};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{BeforeUnloadEvent, Event, KeyboardEvent};
use web_time::Instant;

/// Ask the browser to put the whole document in fullscreen.
///
/// `requestFullscreen` answers with a promise; browsers reject it outside a
/// user gesture. Both a synchronous throw and a rejection come back as a
/// [`Capability::Fullscreen`] error.
pub async fn request_fullscreen() -> BreachResult<()> {
    let element = gloo::utils::document_element();
    let method = Reflect::get(&element, &JsValue::from_str("requestFullscreen"))
        .map_err(fullscreen_denied)?;
    let method = method
        .dyn_into::<Function>()
        .map_err(|_| BreachError::capability(Capability::Fullscreen, "requestFullscreen unsupported"))?;
    let returned = method.call0(&element).map_err(fullscreen_denied)?;
    settle(returned).await
}

/// Wait on a promise-returning browser call. Non-promise values count as done.
async fn settle(returned: JsValue) -> BreachResult<()> {
    match returned.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise).await.map(|_| ()).map_err(fullscreen_denied),
        Err(_) => Ok(()),
    }
}

fn fullscreen_denied(err: JsValue) -> BreachError {
    BreachError::capability(Capability::Fullscreen, format!("{:?}", err))
}

fn request_fullscreen_best_effort() {
    spawn_local(async {
        match request_fullscreen().await {
            Ok(()) => tracing::debug!("fullscreen entered"),
            Err(err) if err.is_capability_denial() => {
                tracing::debug!(%err, "fullscreen request ignored")
            }
            Err(err) => tracing::warn!(%err, "fullscreen request failed"),
        }
    });
}

fn chord_of(event: &KeyboardEvent) -> KeyChord {
    KeyChord {
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
        alt: event.alt_key(),
        ..KeyChord::new(event.key())
    }
}

/// Restrictions held for the lifetime of the mounted page.
pub struct SessionLock {
    _context_menu: EventListener,
    _keydown: EventListener,
    loss: RefCell<Option<LossLock>>,
}

impl SessionLock {
    /// Request fullscreen and install the document listeners.
    ///
    /// The keydown listener reads `live` on every event, so it follows phase
    /// changes without being re-registered.
    pub fn engage(live: LivePhase) -> Self {
        request_fullscreen_best_effort();

        let document = gloo::utils::document();
        let options = EventListenerOptions::enable_prevent_default();

        let context_menu =
            EventListener::new_with_options(&document, "contextmenu", options, |event: &Event| {
                event.prevent_default();
            });

        let policy = KeyPolicy;
        let keydown = EventListener::new_with_options(&document, "keydown", options, move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let chord = chord_of(event);
            if let Some(reason) = policy.classify(&chord, live.get()) {
                tracing::debug!(?reason, key = %chord.key, "key suppressed");
                event.prevent_default();
            }
        });

        tracing::info!("session lock engaged");
        Self {
            _context_menu: context_menu,
            _keydown: keydown,
            loss: RefCell::new(None),
        }
    }

    /// Escalate after a wrong guess. Only the first call has an effect.
    pub fn engage_loss(&self, guard: LeaveGuard) {
        let mut loss = self.loss.borrow_mut();
        if loss.is_none() {
            *loss = Some(LossLock::engage(guard));
        }
    }
}

impl Drop for SessionLock {
    fn drop(&mut self) {
        tracing::info!("session lock released");
    }
}

/// Fullscreen again plus a `beforeunload` prompt that removes itself when the
/// guard window ends.
pub struct LossLock {
    _unload: Rc<RefCell<Option<EventListener>>>,
    _expiry: Timeout,
}

impl LossLock {
    fn engage(guard: LeaveGuard) -> Self {
        request_fullscreen_best_effort();

        let window = gloo::utils::window();
        let listener = EventListener::new_with_options(
            &window,
            "beforeunload",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                if !guard.is_active(Instant::now()) {
                    return;
                }
                event.prevent_default();
                if let Some(event) = event.dyn_ref::<BeforeUnloadEvent>() {
                    event.set_return_value("");
                }
            },
        );

        let unload = Rc::new(RefCell::new(Some(listener)));
        let expiring = unload.clone();
        let millis = u32::try_from(guard.window().as_millis()).unwrap_or(u32::MAX);
        let expiry = Timeout::new(millis, move || {
            expiring.borrow_mut().take();
            tracing::info!("leave guard lapsed");
        });

        tracing::info!(window_ms = millis, "loss lock engaged");
        Self {
            _unload: unload,
            _expiry: expiry,
        }
    }
}
