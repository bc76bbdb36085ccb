//! Breachgrid Core Library
//!
//! Logic behind a one-guess coordinate puzzle page.
//!
//! ## Overview
//!
//! The page shows a grid of decorative digests and accepts a single guess.
//! A correct guess wins; anything else loses and locks the page down for a
//! few seconds. This crate holds everything that does not touch the browser:
//!
//! - [`session`]: the `start -> win | lose` state machine
//! - [`grid`]: the asynchronous decorative digest grid
//! - [`glitch`]: noise text for the lose overlay
//! - [`guard`]: the leave-confirmation window after a loss
//! - [`keys`]: which keystrokes the page swallows
//!
//! ## Quick Start
//!
//! ```ignore
//! use breachgrid_core::{Phase, Session};
//! use web_time::Instant;
//!
//! let mut session = Session::default();
//! session.set_input(" 18.5204,73.8567 ");
//! assert_eq!(session.submit(Instant::now())?, Phase::Win);
//! ```

pub mod config;
pub mod error;
pub mod glitch;
pub mod grid;
pub mod guard;
pub mod keys;
pub mod phase;
pub mod session;

// Re-exports
pub use config::PuzzleConfig;
pub use error::{BreachError, BreachResult, Capability};
pub use glitch::{glitch_lines, glitch_overlay};
pub use grid::{display_cell, generate_grid, DecorativeGrid, DigestSource, Sha256Source};
pub use guard::LeaveGuard;
pub use keys::{KeyChord, KeyPolicy, Suppression};
pub use phase::{LivePhase, Phase};
pub use session::{evaluate_guess, trim_guess, Session, Verdict};
