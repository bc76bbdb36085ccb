//! Page components for Breachgrid, one per phase.

mod lose;
mod start;
mod win;

pub use lose::LosePage;
pub use start::StartPage;
pub use win::WinPage;
