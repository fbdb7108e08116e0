//! Display formatting for amounts and dates.
//!
//! Amounts live as integer cents everywhere; these helpers only decide how
//! they look on screen.

use chrono::NaiveDate;

/// Format cents as a currency string, e.g. `$1,234.56` or `-$0.99`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
}

/// Like [`format_amount`], but income carries an explicit `+` for ledger rows.
pub fn format_signed_amount(cents: i64) -> String {
    if cents > 0 {
        format!("+{}", format_amount(cents))
    } else {
        format_amount(cents)
    }
}

/// Parse a user-typed amount like `12.50`, `$1,200` or `-3.99` into cents.
///
/// At most two decimal places; anything else reads as `None`.
pub fn parse_amount(input: &str) -> Option<i64> {
    let cleaned = input.trim().trim_start_matches('$').replace(',', "");
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    if digits.is_empty() {
        return None;
    }

    let (dollars, cents) = match digits.split_once('.') {
        Some((d, c)) => (d, c),
        None => (digits, ""),
    };
    if dollars.is_empty() && cents.is_empty() {
        return None;
    }
    if !dollars.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let cents_part = match cents.len() {
        0 => 0,
        1 => cents.parse::<i64>().ok()? * 10,
        2 => cents.parse::<i64>().ok()?,
        _ => return None,
    };
    let dollars_part: i64 = if dollars.is_empty() {
        0
    } else {
        dollars.parse().ok()?
    };

    let total = dollars_part.checked_mul(100)?.checked_add(cents_part)?;
    Some(if negative { -total } else { total })
}

/// Title for a month view, e.g. `August 2025`.
pub fn month_title(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.format("%B %Y").to_string(),
        None => format!("{month}/{year}"),
    }
}

/// Short row label for a date, e.g. `Aug 4`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Relative label for recent dates, falling back to the full date.
pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (today - date).num_days();
    match diff {
        i64::MIN..=-1 => day_label(date),
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{diff} days ago"),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
