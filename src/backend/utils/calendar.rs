//! Month-grid math for the calendar view.

use chrono::{Datelike, Duration, NaiveDate};

/// One cell of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// False for the padding days borrowed from neighboring months.
    pub in_month: bool,
}

/// Weekday headers matching the grid order.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Build the Monday-first grid for a month, padded with the neighboring
/// months' days to full weeks. An invalid month yields no weeks.
pub fn month_grid(year: i32, month: u32) -> Vec<Vec<GridDay>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let last = match last_day_of_month(year, month) {
        Some(day) => day,
        None => return Vec::new(),
    };

    let mut day = first - Duration::days(i64::from(first.weekday().num_days_from_monday()));
    let mut weeks = Vec::new();
    while day <= last {
        let mut week = Vec::with_capacity(7);
        for _ in 0..7 {
            week.push(GridDay {
                date: day,
                in_month: day.month() == month,
            });
            day = day + Duration::days(1);
        }
        weeks.push(week);
    }
    weeks
}

/// First day of the month paired with the first day of the next one,
/// as a half-open span for range queries.
pub fn month_span(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (end_year, end_month) = next_month(year, month);
    let end = NaiveDate::from_ymd_opt(end_year, end_month, 1)?;
    Some((start, end))
}

/// Year and month one step forward.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// Year and month one step back.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 { (year - 1, 12) } else { (year, month - 1) }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = next_month(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1).map(|d| d - Duration::days(1))
}

#[cfg(test)]
#[path = "calendar_test.rs"]
mod tests;
