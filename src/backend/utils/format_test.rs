use chrono::NaiveDate;

use super::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// =============================================================================
// format_amount
// =============================================================================

#[test]
fn format_amount_zero() {
    assert_eq!(format_amount(0), "$0.00");
}

#[test]
fn format_amount_cents_only() {
    assert_eq!(format_amount(7), "$0.07");
}

#[test]
fn format_amount_negative() {
    assert_eq!(format_amount(-99), "-$0.99");
}

#[test]
fn format_amount_groups_thousands() {
    assert_eq!(format_amount(123_456_789), "$1,234,567.89");
}

#[test]
fn format_amount_exact_thousand() {
    assert_eq!(format_amount(100_000), "$1,000.00");
}

#[test]
fn format_signed_amount_income_gets_plus() {
    assert_eq!(format_signed_amount(1500), "+$15.00");
}

#[test]
fn format_signed_amount_spending_keeps_minus() {
    assert_eq!(format_signed_amount(-1500), "-$15.00");
}

#[test]
fn format_signed_amount_zero_has_no_sign() {
    assert_eq!(format_signed_amount(0), "$0.00");
}

// =============================================================================
// parse_amount
// =============================================================================

#[test]
fn parse_amount_plain_dollars() {
    assert_eq!(parse_amount("12"), Some(1200));
}

#[test]
fn parse_amount_two_decimals() {
    assert_eq!(parse_amount("12.34"), Some(1234));
}

#[test]
fn parse_amount_one_decimal() {
    assert_eq!(parse_amount("12.5"), Some(1250));
}

#[test]
fn parse_amount_dollar_sign_and_commas() {
    assert_eq!(parse_amount("$1,200.00"), Some(120_000));
}

#[test]
fn parse_amount_negative() {
    assert_eq!(parse_amount("-3.99"), Some(-399));
}

#[test]
fn parse_amount_bare_fraction() {
    assert_eq!(parse_amount(".50"), Some(50));
}

#[test]
fn parse_amount_rejects_three_decimals() {
    assert_eq!(parse_amount("1.234"), None);
}

#[test]
fn parse_amount_rejects_words() {
    assert_eq!(parse_amount("lunch"), None);
}

#[test]
fn parse_amount_rejects_empty() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("   "), None);
    assert_eq!(parse_amount("-"), None);
    assert_eq!(parse_amount("."), None);
}

#[test]
fn parse_amount_roundtrips_format() {
    for cents in [0, 7, 99, 100, 1234, 123_456_789] {
        assert_eq!(parse_amount(&format_amount(cents)), Some(cents));
    }
}

// =============================================================================
// date labels
// =============================================================================

#[test]
fn month_title_formats_name_and_year() {
    assert_eq!(month_title(2025, 8), "August 2025");
}

#[test]
fn month_title_invalid_month_falls_back() {
    assert_eq!(month_title(2025, 13), "13/2025");
}

#[test]
fn day_label_short_form() {
    assert_eq!(day_label(date(2025, 8, 4)), "Aug 4");
}

#[test]
fn relative_day_label_today() {
    let today = date(2025, 8, 22);
    assert_eq!(relative_day_label(today, today), "Today");
}

#[test]
fn relative_day_label_yesterday() {
    let today = date(2025, 8, 22);
    assert_eq!(relative_day_label(date(2025, 8, 21), today), "Yesterday");
}

#[test]
fn relative_day_label_recent_days() {
    let today = date(2025, 8, 22);
    assert_eq!(relative_day_label(date(2025, 8, 19), today), "3 days ago");
}

#[test]
fn relative_day_label_old_dates_spell_out() {
    let today = date(2025, 8, 22);
    assert_eq!(relative_day_label(date(2025, 1, 3), today), "Jan 3, 2025");
}

#[test]
fn relative_day_label_future_uses_short_form() {
    let today = date(2025, 8, 22);
    assert_eq!(relative_day_label(date(2025, 8, 30), today), "Aug 30");
}
