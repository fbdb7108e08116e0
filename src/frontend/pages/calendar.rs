//! Calendar page: the month as a grid of daily totals.

use crate::backend::api::ApiClient;
use crate::backend::models::daily_net;
use crate::backend::utils::calendar::{month_grid, next_month, prev_month, GridDay, WEEKDAY_HEADERS};
use crate::backend::utils::format::{format_signed_amount, month_title};
use crate::frontend::components::common::LoadingPane;
use crate::frontend::services::session::Session;
use chrono::{Datelike, Local};
use dioxus::prelude::*;

#[component]
pub fn Calendar() -> Element {
    let session = use_context::<Session>();
    let today = Local::now().date_naive();

    let mut year = use_signal(|| today.year());
    let mut month = use_signal(|| today.month());

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
            let per_day = daily_net(rows);
            let weeks = month_grid(year(), month());
            rsx! {
                div { class: "calendar-grid",
                    for header in WEEKDAY_HEADERS {
                        div { key: "{header}", class: "weekday-header", "{header}" }
                    }
                    {weeks.into_iter().flatten().map(|day| {
                        let net = per_day.get(&day.date).copied().filter(|n| *n != 0);
                        rsx! {
                            DayCell {
                                key: "{day.date}",
                                day: day,
                                net: net,
                                today: day.date == today
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

            {body}
        }
    }
}

#[component]
fn DayCell(day: GridDay, net: Option<i64>, today: bool) -> Element {
    let classes = {
        let mut classes = vec!["day-cell"];
        if !day.in_month {
            classes.push("outside");
        }
        if today {
            classes.push("today");
        }
        classes.join(" ")
    };
    let number = day.date.day().to_string();

    rsx! {
        div { class: classes,
            div { class: "day-number", "{number}" }
            {net.map(|cents| {
                let net_class = if cents >= 0 { "day-net income" } else { "day-net spend" };
                let label = format_signed_amount(cents);
                rsx! { div { class: net_class, "{label}" } }
            })}
        }
    }
}
