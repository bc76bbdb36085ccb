//! Lose page - noise overlay and the breach notice.

use dioxus::prelude::*;

use crate::components::GlitchOverlay;

#[component]
pub fn LosePage() -> Element {
    rsx! {
        main { class: "page lose-page",
            GlitchOverlay {}
            div { class: "breach-notice",
                h1 { class: "page-title breached", "SYSTEM BREACHED - GAME OVER" }
            }
        }
    }
}
