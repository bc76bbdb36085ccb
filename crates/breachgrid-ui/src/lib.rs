//! Breachgrid UI Components
//!
//! Dioxus primitives for the puzzle page, styled by the terminal theme in
//! the app crate:
//! - **Phosphor green**: entered text and the primary action
//! - **Alarm red**: the breach state
//! - **Void black**: everything else

pub mod components;

pub use components::*;
