use dioxus::prelude::*;

/// A labelled figure on the dashboard, tinted by its accent class.
#[component]
pub fn SummaryCard(label: String, value: String, accent: String) -> Element {
    rsx! {
        div { class: "summary-card summary-card-{accent}",
            div { class: "summary-card-label", "{label}" }
            div { class: "summary-card-value", "{value}" }
        }
    }
}
