//! Folio UI Components
//!
//! Small Dioxus widgets shared by the portfolio shell. Icons are Font
//! Awesome class lists, so the host page must load the Font Awesome
//! stylesheet.

pub mod components;

pub use components::*;
