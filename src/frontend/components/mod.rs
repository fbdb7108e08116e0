//! UI components and layouts. The route guards in `guard.rs` decide
//! which branch of the router a visitor may see.

pub mod common;
pub mod guard;
pub mod layout;
