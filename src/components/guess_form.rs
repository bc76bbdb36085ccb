//! The single guess form.

use breachgrid_ui::{Button, Input};
use dioxus::prelude::*;

use crate::context::use_game;

/// Coordinate input plus submit.
///
/// The input is `required`, so the browser refuses an empty submission
/// before `onsubmit` fires.
#[component]
pub fn GuessForm() -> Element {
    let game = use_game();
    let value = game.session.read().input().to_string();
    let on_input = game.clone();
    let on_submit = game.clone();

    rsx! {
        form {
            class: "guess-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit.submit();
            },
            Input {
                id: "guess".to_string(),
                value: value,
                oninput: move |text: String| on_input.set_input(text),
                placeholder: "lat,long".to_string(),
                required: true,
                autofocus: true,
            }
            Button { button_type: "submit".to_string(), "Submit" }
        }
    }
}
