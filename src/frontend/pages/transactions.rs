//! Monthly transaction list and entry form.

use crate::backend::api::rest::NewTransaction;
use crate::backend::api::ApiClient;
use crate::backend::utils::calendar::{next_month, prev_month};
use crate::backend::utils::format::{day_label, format_signed_amount, month_title, parse_amount};
use crate::backend::utils::theme;
use crate::frontend::components::common::LoadingPane;
use crate::frontend::services::session::Session;
use chrono::{Datelike, Local, NaiveDate};
use dioxus::{events::KeyboardEvent, prelude::*};

#[component]
pub fn Transactions() -> Element {
    let session = use_context::<Session>();
    let today = Local::now().date_naive();

    let mut year = use_signal(|| today.year());
    let mut month = use_signal(|| today.month());

    let mut entry_date = use_signal(|| today.format("%Y-%m-%d").to_string());
    let mut entry_description = use_signal(String::new);
    let mut entry_category = use_signal(|| "groceries".to_string());
    let mut entry_kind = use_signal(|| "expense".to_string());
    let mut entry_amount = use_signal(String::new);
    let mut form_error = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let mut transactions = use_resource(move || {
        let token = session.access_token();
        let year = year();
        let month = month();
        async move {
            let Some(token) = token else {
                return Ok(Vec::new());
            };
            ApiClient::shared()
                .fetch_transactions(&token, year, month)
                .await
        }
    });

    let mut submit_entry = move || {
        if saving() {
            return;
        }
        let Ok(date) = NaiveDate::parse_from_str(entry_date.read().as_str(), "%Y-%m-%d") else {
            form_error.set("Pick a date for the entry.".to_string());
            return;
        };
        let description = entry_description.read().trim().to_string();
        if description.is_empty() {
            form_error.set("Describe the transaction first.".to_string());
            return;
        }
        let magnitude = match parse_amount(&entry_amount.read()) {
            Some(cents) if cents != 0 => cents.abs(),
            _ => {
                form_error.set("Enter an amount like 12.50.".to_string());
                return;
            }
        };
        // The kind selector decides the sign; spending is stored negative.
        let amount_cents = if entry_kind.read().as_str() == "income" {
            magnitude
        } else {
            -magnitude
        };
        let row = NewTransaction {
            date,
            description,
            category: entry_category.read().clone(),
            amount_cents,
        };

        saving.set(true);
        form_error.set(String::new());

        spawn(async move {
            let Some(token) = session.access_token() else {
                saving.set(false);
                return;
            };
            match ApiClient::shared().create_transaction(&token, &row).await {
                Ok(_) => {
                    entry_description.set(String::new());
                    entry_amount.set(String::new());
                    transactions.restart();
                }
                Err(e) => {
                    log::warn!("Saving the transaction failed: {e}");
                    form_error.set("Couldn't save the entry. Try again.".to_string());
                }
            }
            saving.set(false);
        });
    };

    let on_amount_keypress = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            submit_entry();
        }
    };

    let step_back = move |_: Event<MouseData>| {
        let (y, m) = prev_month(year(), month());
        year.set(y);
        month.set(m);
    };
    let step_forward = move |_: Event<MouseData>| {
        let (y, m) = next_month(year(), month());
        year.set(y);
        month.set(m);
    };

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
            let rows = rows.clone();
            rsx! {
                if rows.is_empty() {
                    div { class: "empty-note", "No transactions this month." }
                }

                ul { class: "tx-list",
                    {rows.iter().map(|tx| {
                        let dot_style = format!("background: #{};", theme::category_color(&tx.category));
                        let when = day_label(tx.date);
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
            div { class: "month-pager",
                button { class: "pager-btn", onclick: step_back, "‹" }
                h2 { class: "page-title", {month_title(year(), month())} }
                button { class: "pager-btn", onclick: step_forward, "›" }
            }

            div { class: "entry-form",
                input {
                    class: "entry-input entry-date",
                    r#type: "date",
                    value: "{entry_date()}",
                    oninput: move |e| entry_date.set(e.value())
                }
                input {
                    class: "entry-input entry-description",
                    r#type: "text",
                    placeholder: "Description",
                    value: "{entry_description()}",
                    oninput: move |e| entry_description.set(e.value())
                }
                select {
                    class: "entry-input entry-category",
                    value: "{entry_category()}",
                    onchange: move |e| entry_category.set(e.value()),
                    {theme::known_categories().map(|c| rsx! {
                        option { key: "{c}", value: "{c}", {theme::category_label(c)} }
                    })}
                }
                select {
                    class: "entry-input entry-kind",
                    value: "{entry_kind()}",
                    onchange: move |e| entry_kind.set(e.value()),
                    option { value: "expense", "Expense" }
                    option { value: "income", "Income" }
                }
                input {
                    class: "entry-input entry-amount",
                    r#type: "text",
                    placeholder: "0.00",
                    value: "{entry_amount()}",
                    oninput: move |e| entry_amount.set(e.value()),
                    onkeypress: on_amount_keypress
                }
                button {
                    class: "entry-add",
                    disabled: saving(),
                    onclick: move |_| submit_entry(),
                    if saving() { "Adding..." } else { "Add" }
                }
            }

            div {
                class: if form_error().is_empty() { "form-error error-hidden" } else { "form-error error-visible" },
                "{form_error()}"
            }

            {body}
        }
    }
}
