//! Frontend module for the Tally desktop app.

pub mod app;
pub mod assets;
pub mod components;
pub mod pages;
pub mod services;
