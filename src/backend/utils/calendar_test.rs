use chrono::NaiveDate;

use super::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn august_2025_spans_five_weeks() {
    // Aug 1, 2025 is a Friday; the grid runs Mon Jul 28 through Sun Aug 31.
    let grid = month_grid(2025, 8);
    assert_eq!(grid.len(), 5);
    assert!(grid.iter().all(|week| week.len() == 7));

    assert_eq!(grid[0][0].date, date(2025, 7, 28));
    assert!(!grid[0][0].in_month);

    assert_eq!(grid[0][4].date, date(2025, 8, 1));
    assert!(grid[0][4].in_month);

    assert_eq!(grid[4][6].date, date(2025, 8, 31));
    assert!(grid[4][6].in_month);
}

#[test]
fn february_2021_needs_no_padding() {
    // Feb 1, 2021 is a Monday and the month is exactly four weeks long.
    let grid = month_grid(2021, 2);
    assert_eq!(grid.len(), 4);
    assert!(grid.iter().flatten().all(|day| day.in_month));
    assert_eq!(grid[0][0].date, date(2021, 2, 1));
    assert_eq!(grid[3][6].date, date(2021, 2, 28));
}

#[test]
fn december_pads_into_january() {
    let grid = month_grid(2025, 12);
    let last_week = grid.last().unwrap();
    let trailing: Vec<_> = last_week.iter().filter(|day| !day.in_month).collect();
    // Dec 31, 2025 is a Wednesday, so Thu-Sun of the last week are January.
    assert_eq!(trailing.len(), 4);
    assert!(trailing.iter().all(|day| day.date.month() == 1));
}

#[test]
fn every_cell_of_the_month_appears_once() {
    let grid = month_grid(2025, 8);
    let in_month: Vec<_> = grid
        .iter()
        .flatten()
        .filter(|day| day.in_month)
        .map(|day| day.date.day())
        .collect();
    assert_eq!(in_month.len(), 31);
    assert_eq!(in_month.first(), Some(&1));
    assert_eq!(in_month.last(), Some(&31));
}

#[test]
fn invalid_month_yields_empty_grid() {
    assert!(month_grid(2025, 0).is_empty());
    assert!(month_grid(2025, 13).is_empty());
}

#[test]
fn month_span_is_half_open() {
    let (start, end) = month_span(2025, 8).unwrap();
    assert_eq!(start, date(2025, 8, 1));
    assert_eq!(end, date(2025, 9, 1));
}

#[test]
fn month_span_crosses_the_year_boundary() {
    let (start, end) = month_span(2025, 12).unwrap();
    assert_eq!(start, date(2025, 12, 1));
    assert_eq!(end, date(2026, 1, 1));
}

#[test]
fn month_span_rejects_invalid_months() {
    assert!(month_span(2025, 0).is_none());
    assert!(month_span(2025, 13).is_none());
}

#[test]
fn month_stepping_wraps_at_year_edges() {
    assert_eq!(next_month(2025, 12), (2026, 1));
    assert_eq!(next_month(2025, 7), (2025, 8));
    assert_eq!(prev_month(2025, 1), (2024, 12));
    assert_eq!(prev_month(2025, 7), (2025, 6));
}
