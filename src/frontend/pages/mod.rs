//! Page components, one per route.

pub mod budgets;
pub mod calendar;
pub mod dashboard;
pub mod login;
pub mod transactions;
