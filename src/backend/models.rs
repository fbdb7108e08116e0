//! Core data types shared between the hosted service and the views.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed-in account identity as the auth endpoint reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Account {
    /// Name to greet the user with in the header.
    pub fn short_name(&self) -> &str {
        match &self.display_name {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

/// A single ledger row. Amounts are integer cents; spending is negative,
/// income positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount_cents: i64,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount_cents > 0
    }
}

/// Monthly spending cap for one category, with the month's spend rolled up
/// server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub category: String,
    pub limit_cents: i64,
    #[serde(default)]
    pub spent_cents: i64,
}

impl Budget {
    /// Spent share of the limit as a whole percentage, clamped to 0..=100
    /// so the progress bar never overflows its track.
    pub fn progress_percent(&self) -> u32 {
        if self.limit_cents <= 0 {
            return 0;
        }
        let percent = self.spent_cents.max(0) * 100 / self.limit_cents;
        percent.clamp(0, 100) as u32
    }

    pub fn remaining_cents(&self) -> i64 {
        self.limit_cents - self.spent_cents.max(0)
    }

    pub fn is_over(&self) -> bool {
        self.spent_cents > self.limit_cents
    }
}

/// Headline numbers for one month of activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthSummary {
    pub income_cents: i64,
    /// Positive magnitude of everything spent.
    pub spending_cents: i64,
    pub net_cents: i64,
}

impl MonthSummary {
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut income = 0;
        let mut spending = 0;
        for tx in transactions {
            if tx.amount_cents >= 0 {
                income += tx.amount_cents;
            } else {
                spending -= tx.amount_cents;
            }
        }
        Self {
            income_cents: income,
            spending_cents: spending,
            net_cents: income - spending,
        }
    }
}

/// Net cents per day, for the calendar cells.
pub fn daily_net(transactions: &[Transaction]) -> HashMap<NaiveDate, i64> {
    let mut per_day = HashMap::new();
    for tx in transactions {
        *per_day.entry(tx.date).or_insert(0) += tx.amount_cents;
    }
    per_day
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(day: u32, amount_cents: i64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
            description: "test".to_string(),
            category: "groceries".to_string(),
            amount_cents,
        }
    }

    #[test]
    fn summary_splits_income_and_spending() {
        let summary = MonthSummary::compute(&[tx(1, 250_000), tx(2, -4_500), tx(3, -10_000)]);
        assert_eq!(summary.income_cents, 250_000);
        assert_eq!(summary.spending_cents, 14_500);
        assert_eq!(summary.net_cents, 235_500);
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        assert_eq!(MonthSummary::compute(&[]), MonthSummary::default());
    }

    #[test]
    fn budget_progress_clamps_at_hundred() {
        let budget = Budget {
            id: Uuid::new_v4(),
            category: "dining".to_string(),
            limit_cents: 10_000,
            spent_cents: 25_000,
        };
        assert_eq!(budget.progress_percent(), 100);
        assert!(budget.is_over());
    }

    #[test]
    fn budget_progress_ignores_refund_credit() {
        let budget = Budget {
            id: Uuid::new_v4(),
            category: "dining".to_string(),
            limit_cents: 10_000,
            spent_cents: -2_000,
        };
        assert_eq!(budget.progress_percent(), 0);
        assert_eq!(budget.remaining_cents(), 10_000);
    }

    #[test]
    fn budget_without_limit_reports_zero_progress() {
        let budget = Budget {
            id: Uuid::new_v4(),
            category: "dining".to_string(),
            limit_cents: 0,
            spent_cents: 5_000,
        };
        assert_eq!(budget.progress_percent(), 0);
    }

    #[test]
    fn daily_net_groups_by_date() {
        let per_day = daily_net(&[tx(1, -500), tx(1, -1_500), tx(2, 10_000)]);
        assert_eq!(per_day.len(), 2);
        assert_eq!(
            per_day[&NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()],
            -2_000
        );
        assert_eq!(per_day[&NaiveDate::from_ymd_opt(2025, 8, 2).unwrap()], 10_000);
    }

    #[test]
    fn account_short_name_prefers_display_name() {
        let account = Account {
            id: Uuid::new_v4(),
            email: "sam@example.com".to_string(),
            display_name: Some("Sam".to_string()),
        };
        assert_eq!(account.short_name(), "Sam");
    }

    #[test]
    fn account_short_name_falls_back_to_mailbox() {
        let account = Account {
            id: Uuid::new_v4(),
            email: "sam@example.com".to_string(),
            display_name: None,
        };
        assert_eq!(account.short_name(), "sam");
    }
}
