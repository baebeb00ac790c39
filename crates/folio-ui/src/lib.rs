//! Folio UI Components
//!
//! Reusable Dioxus widgets for the portfolio page. Styling lives in the
//! desktop app's global stylesheet; these components only emit the class
//! names it expects.

pub mod components;

pub use components::*;
