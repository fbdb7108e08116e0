//! Budget overview page with CSV export.

use std::path::PathBuf;

use crate::backend::api::ApiClient;
use crate::backend::models::Budget;
use crate::backend::utils::format::format_amount;
use crate::backend::utils::paths::get_export_dir;
use crate::backend::utils::theme;
use crate::frontend::components::common::LoadingPane;
use crate::frontend::services::session::Session;
use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

#[component]
pub fn Budgets() -> Element {
    let session = use_context::<Session>();

    let mut budgets = use_resource(move || {
        let token = session.access_token();
        async move {
            let Some(token) = token else {
                return Ok(Vec::new());
            };
            ApiClient::shared().fetch_budgets(&token).await
        }
    });

    let mut export_note = use_signal(String::new);

    let on_export = move |_: Event<MouseData>| {
        let rows = match &*budgets.read_unchecked() {
            Some(Ok(rows)) if !rows.is_empty() => rows.clone(),
            _ => return,
        };
        let when = Local::now().date_naive();
        spawn(async move {
            match export_budgets(&rows, when).await {
                Ok(path) => export_note.set(format!("Saved to {}", path.display())),
                Err(e) => {
                    log::warn!("Budget export failed: {e}");
                    export_note.set("Couldn't export the budgets.".to_string());
                }
            }
        });
    };

    let loaded = budgets.read_unchecked();
    let body = match &*loaded {
        None => rsx! { LoadingPane {} },
        Some(Err(_)) => rsx! {
            div { class: "error-pane",
                p { "Couldn't load your budgets. Check your connection and try again." }
                button {
                    class: "retry-btn",
                    onclick: move |_| budgets.restart(),
                    "Try again"
                }
            }
        },
        Some(Ok(rows)) => {
            let rows = rows.clone();
            rsx! {
                if rows.is_empty() {
                    div { class: "empty-note", "No budgets set up yet." }
                }

                ul { class: "budget-list",
                    {rows.iter().map(|b| {
                        let dot_style = format!("background: #{};", theme::category_color(&b.category));
                        let bar_style = format!("width: {}%;", b.progress_percent());
                        let bar_class = if b.is_over() { "budget-bar-fill over" } else { "budget-bar-fill" };
                        let amounts = format!(
                            "{} of {}",
                            format_amount(b.spent_cents),
                            format_amount(b.limit_cents)
                        );
                        let note = if b.is_over() {
                            format!("{} over", format_amount(-b.remaining_cents()))
                        } else {
                            format!("{} left", format_amount(b.remaining_cents()))
                        };
                        let note_class = if b.is_over() { "budget-note over" } else { "budget-note" };
                        rsx! {
                            li { key: "{b.id}", class: "budget-row",
                                div { class: "budget-head",
                                    span { class: "tx-dot", style: dot_style }
                                    span { class: "budget-category", {theme::category_label(&b.category)} }
                                    span { class: note_class, "{note}" }
                                }
                                div { class: "budget-bar",
                                    div { class: bar_class, style: bar_style }
                                }
                                div { class: "budget-amounts", "{amounts}" }
                            }
                        }
                    })}
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            div { class: "page-head",
                h2 { class: "page-title", "Budgets" }
                button { class: "export-btn", onclick: on_export, "Export CSV" }
            }

            div {
                class: if export_note().is_empty() { "export-note error-hidden" } else { "export-note error-visible" },
                "{export_note()}"
            }

            {body}
        }
    }
}

/// Writes the budgets into `exports/budgets-YYYY-MM.csv` and returns
/// the path.
async fn export_budgets(budgets: &[Budget], when: NaiveDate) -> anyhow::Result<PathBuf> {
    let dir = get_export_dir()?;
    tokio::fs::create_dir_all(&dir).await?;
    let path = dir.join(format!("budgets-{}.csv", when.format("%Y-%m")));
    tokio::fs::write(&path, budgets_csv(budgets)).await?;
    Ok(path)
}

/// Plain decimal amounts, no currency sign or separators, so the file
/// survives spreadsheet imports.
fn budgets_csv(budgets: &[Budget]) -> String {
    let mut out = String::from("category,limit,spent,remaining\n");
    for b in budgets {
        out.push_str(&format!(
            "{},{},{},{}\n",
            csv_field(&b.category),
            csv_amount(b.limit_cents),
            csv_amount(b.spent_cents),
            csv_amount(b.remaining_cents()),
        ));
    }
    out
}

/// A category carrying a delimiter would shear its row; quote it, with
/// inner quotes doubled.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

fn csv_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    format!("{sign}{}.{:02}", magnitude / 100, magnitude % 100)
}
