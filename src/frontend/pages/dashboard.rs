//! Dashboard page: the current month at a glance.

use crate::backend::api::ApiClient;
use crate::backend::models::MonthSummary;
use crate::backend::utils::format::{
    format_amount, format_signed_amount, month_title, relative_day_label,
};
use crate::backend::utils::theme;
use crate::frontend::components::common::{LoadingPane, SummaryCard};
use crate::frontend::services::session::Session;
use chrono::{Datelike, Local};
use dioxus::prelude::*;

const RECENT_ROWS: usize = 6;

#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Session>();
    let today = Local::now().date_naive();

    let mut transactions = use_resource(move || {
        let token = session.access_token();
        async move {
            let Some(token) = token else {
                return Ok(Vec::new());
            };
            ApiClient::shared()
                .fetch_transactions(&token, today.year(), today.month())
                .await
        }
    });

    let loaded = transactions.read_unchecked();
    let body = match &*loaded {
        None => rsx! { LoadingPane {} },
        Some(Err(_)) => rsx! {
            div { class: "error-pane",
                p { "Couldn't load this month. Check your connection and try again." }
                button {
                    class: "retry-btn",
                    onclick: move |_| transactions.restart(),
                    "Try again"
                }
            }
        },
        Some(Ok(rows)) => {
            let summary = MonthSummary::compute(rows);
            let recent: Vec<_> = rows.iter().take(RECENT_ROWS).cloned().collect();
            rsx! {
                div { class: "summary-cards",
                    SummaryCard {
                        label: "Income",
                        value: format_amount(summary.income_cents),
                        accent: "income"
                    }
                    SummaryCard {
                        label: "Spending",
                        value: format_amount(summary.spending_cents),
                        accent: "spend"
                    }
                    SummaryCard {
                        label: "Net",
                        value: format_signed_amount(summary.net_cents),
                        accent: "net"
                    }
                }

                h3 { class: "section-title", "Recent activity" }

                if recent.is_empty() {
                    div { class: "empty-note", "Nothing recorded this month yet." }
                }

                ul { class: "tx-list",
                    {recent.iter().map(|tx| {
                        let dot_style = format!("background: #{};", theme::category_color(&tx.category));
                        let when = relative_day_label(tx.date, today);
                        let amount = format_signed_amount(tx.amount_cents);
                        let amount_class = if tx.is_income() { "tx-amount income" } else { "tx-amount spend" };
                        rsx! {
                            li { key: "{tx.id}", class: "tx-row",
                                span { class: "tx-dot", style: dot_style }
                                div { class: "tx-main",
                                    div { class: "tx-description", "{tx.description}" }
                                    div { class: "tx-meta", {theme::category_label(&tx.category)} }
                                }
                                div { class: "tx-side",
                                    div { class: amount_class, "{amount}" }
                                    div { class: "tx-when", "{when}" }
                                }
                            }
                        }
                    })}
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            h2 { class: "page-title", {month_title(today.year(), today.month())} }
            {body}
        }
    }
}
