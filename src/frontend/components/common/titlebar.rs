use dioxus::prelude::*;

#[component]
pub fn TitleBar() -> Element {
    rsx! {
        div {
            class: "custom-titlebar",
            onmousedown: move |_event| {
                let window = dioxus_desktop::window();
                let _ = window.drag();
            }
        }

        div {
            class: "window-controls",
            button {
                class: "window-control-btn minimize-btn",
                title: "Minimize",
                onclick: move |_| {
                    let window = dioxus_desktop::window();
                    let _ = window.set_minimized(true);
                },
                span { class: "minimize-icon", "─" }
            }

            button {
                class: "window-control-btn close-btn",
                title: "Close",
                onclick: move |_| {
                    let window = dioxus_desktop::window();
                    window.close();
                },
                span { class: "close-icon", "✕" }
            }
        }
    }
}
