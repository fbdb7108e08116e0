//! Common reusable components.

pub mod cards;
pub mod spinner;
pub mod titlebar;

pub use cards::SummaryCard;
pub use spinner::LoadingPane;
pub use titlebar::TitleBar;
