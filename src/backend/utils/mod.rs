//! Utility modules for the backend.
//!
//! Small, pure helpers: path resolution, display formatting,
//! and the calendar math the month view renders.

/// Month-grid math for the calendar view.
pub mod calendar;
/// Display formatting for amounts and dates.
pub mod format;
/// Path utilities for the app data directory.
pub mod paths;
/// Category display colors and labels.
pub mod theme;
