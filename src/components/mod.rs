//! UI Components for Breachgrid.

mod glitch_overlay;
mod guess_form;
mod hash_grid;

pub use glitch_overlay::GlitchOverlay;
pub use guess_form::GuessForm;
pub use hash_grid::HashGrid;
