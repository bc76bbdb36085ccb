use dioxus::prelude::*;

#[component]
pub fn WinPage() -> Element {
    rsx! {
        main { class: "page win-page",
            h1 { class: "page-title", "Correct! You Win!" }
        }
    }
}
