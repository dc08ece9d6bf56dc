//! Portfolio UI Components
//!
//! Presentational Dioxus components for the single-page portfolio.
//!
//! Components never own page state. They receive values from the page
//! container and report user actions through `EventHandler` props; the
//! container applies them to its `ViewState`.
//!
//! Styling is class based. Every class used here is defined in the global
//! stylesheet of the desktop app, with a `.dark` scope for the dark theme.

pub mod components;

pub use components::*;
