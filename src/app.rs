use breachgrid_core::{generate_grid, DecorativeGrid, Phase, PuzzleConfig};
use dioxus::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::context::provide_game;
use crate::crypto::{random_seed, SubtleDigest};
use crate::pages::{LosePage, StartPage, WinPage};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the session, starts the decorative grid, and shows one page per
/// phase. Terminal phases render no form, so a second guess is impossible.
#[component]
pub fn App() -> Element {
    let game = provide_game();

    // One digest batch per page load; published only once every cell resolved.
    let grid_resource = use_resource(|| async move {
        let config = PuzzleConfig::default();
        let mut rng = SmallRng::seed_from_u64(random_seed());
        match generate_grid(&SubtleDigest, &mut rng, &config).await {
            Ok(grid) => Some(grid),
            Err(err) if err.is_capability_denial() => {
                tracing::info!(%err, "decorative grid unavailable");
                None
            }
            Err(err) => {
                tracing::warn!(%err, "decorative grid failed");
                None
            }
        }
    });
    let grid: DecorativeGrid = (*grid_resource.read()).clone().flatten().unwrap_or_default();

    let page = match game.phase() {
        Phase::Start => rsx! { StartPage { grid: grid } },
        Phase::Win => rsx! { WinPage {} },
        Phase::Lose => rsx! { LosePage {} },
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        {page}
    }
}
