//! Terminal theme for Breachgrid.

mod styles;

pub use styles::GLOBAL_STYLES;
