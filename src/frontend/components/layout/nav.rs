use crate::frontend::app::Route;
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

const SECTIONS: [(&str, &str, &str); 4] = [
    ("Dashboard", "/", "◧"),
    ("Transactions", "/transactions", "⇄"),
    ("Budgets", "/budgets", "◔"),
    ("Calendar", "/calendar", "▦"),
];

#[component]
pub fn Navigation() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let current = route.to_string();

    rsx! {
        nav { class: "sidebar",
            ul { class: "nav-items",
                for (label, path, glyph) in SECTIONS {
                    li {
                        key: "{path}",
                        class: if current == path { "nav-item active" } else { "nav-item" },
                        onclick: move |_| { nav.push(path); },
                        span { class: "nav-glyph", "{glyph}" }
                        span { class: "nav-text", "{label}" }
                    }
                }
            }
        }
    }
}
