use dioxus::prelude::*;

/// Full-pane spinner shown while a guard or page is still deciding
/// what to render.
#[component]
pub fn LoadingPane() -> Element {
    rsx! {
        div { class: "loading-pane",
            div { class: "loading-ring" }
        }
    }
}
