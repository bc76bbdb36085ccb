//! Decorative digest grid.
//!
//! Renders nothing until the whole grid has resolved.

use breachgrid_core::{DecorativeGrid, PuzzleConfig};
use dioxus::prelude::*;

/// 5x5 block of truncated digests.
#[component]
pub fn HashGrid(grid: DecorativeGrid) -> Element {
    if grid.is_empty() {
        return rsx! {
            div { class: "hash-grid pending", "aria-hidden": "true" }
        };
    }

    let rows = grid.display_rows(&PuzzleConfig::default());

    rsx! {
        div { class: "hash-grid", "aria-hidden": "true",
            for (r, row) in rows.into_iter().enumerate() {
                div { class: "hash-row", key: "{r}",
                    for (c, cell) in row.into_iter().enumerate() {
                        span { class: "hash-cell", key: "{r}-{c}", "{cell}" }
                    }
                }
            }
        }
    }
}
