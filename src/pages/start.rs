//! Start page - the puzzle itself.

use breachgrid_core::DecorativeGrid;
use dioxus::prelude::*;

use crate::components::{GuessForm, HashGrid};

/// Title, instructions, digest grid and the guess form.
///
/// The form is usable before the grid resolves.
#[component]
pub fn StartPage(grid: DecorativeGrid) -> Element {
    rsx! {
        main { class: "page start-page",
            header { class: "page-header",
                h1 { class: "page-title", "Terminal Puzzle Challenge" }
                p { class: "instructions",
                    "You have only ONE try to decode the coordinates."
                }
                p { class: "instructions muted", "format: lat,long" }
            }

            HashGrid { grid: grid }

            GuessForm {}
        }
    }
}
