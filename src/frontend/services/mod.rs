//! Frontend services for session state and access decisions.

pub mod gate;
pub mod session;
