//! Input Field Components
//!
//! Single-line text input following the terminal theme:
//! - Transparent background with subtle border
//! - Phosphor text for entered values
//! - Glow on focus

use dioxus::prelude::*;

/// CSS class every [`Input`] field carries.
pub const INPUT_CLASS: &str = "input-field";

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    pub id: String,
    pub placeholder: String,
    /// Marks the field mandatory so the browser blocks empty submission
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub autofocus: bool,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut guess = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "guess".to_string(),
///         value: guess(),
///         oninput: move |s| guess.set(s),
///         placeholder: "lat,long".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            input {
                id: "{props.id}",
                class: INPUT_CLASS,
                r#type: "text",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: props.required,
                autofocus: props.autofocus,
                autocomplete: "off",
                spellcheck: "false",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
