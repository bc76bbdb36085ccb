//! Reusable UI components.

mod button;
mod input;

pub use button::*;
pub use input::*;
