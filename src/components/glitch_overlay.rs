//! Full-screen noise shown after a wrong guess.

use breachgrid_core::{glitch_overlay, PuzzleConfig};
use dioxus::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::crypto::random_seed;

/// Fresh noise on every render.
#[component]
pub fn GlitchOverlay() -> Element {
    let mut rng = SmallRng::seed_from_u64(random_seed());
    let lines = glitch_overlay(&mut rng, &PuzzleConfig::default());

    rsx! {
        pre { class: "glitch-overlay", "aria-hidden": "true",
            for (i, line) in lines.into_iter().enumerate() {
                div { class: "glitch-line", key: "{i}", "{line}" }
            }
        }
    }
}
