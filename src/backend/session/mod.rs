//! Local session persistence and inspection.

pub mod cache;
pub mod token;
