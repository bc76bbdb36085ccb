//! Button Components
//!
//! Phosphor-bordered action button with a hover glow.

use dioxus::prelude::*;

/// CSS class every [`Button`] carries.
pub const BUTTON_CLASS: &str = "btn-primary";

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button content
    pub children: Element,
    /// Type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
}

/// Styled button component
///
/// Carries no click handler of its own; as a `submit` button it lets the
/// enclosing form's `onsubmit` fire.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     form { onsubmit: move |e| { e.prevent_default(); submit(); },
///         Button { button_type: "submit".to_string(), "submit" }
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: BUTTON_CLASS,
            r#type: "{props.button_type}",
            {props.children}
        }
    }
}
