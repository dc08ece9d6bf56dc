//! Portfolio Core Library
//!
//! View-state logic for the single-page portfolio, independent of any
//! renderer.
//!
//! ## Overview
//!
//! The page is composed of four independent state machines:
//!
//! - **Theme**: a dark-mode flag that scopes all styling
//! - **Filter**: the selected project category, deriving the visible gallery
//! - **Expansion**: at most one project card showing its details
//! - **Typing**: a per-character reveal of the hero role line on a timer
//!
//! [`ViewState`] bundles them for the page container.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{Category, Filter, ViewState};
//!
//! let mut state = ViewState::default();
//! state.set_filter(Filter::Only(Category::Mobile));
//! assert_eq!(state.visible_projects()[0].title, "Task Manager");
//!
//! state.toggle_project("Task Manager")?;
//! assert!(state.is_expanded("Task Manager"));
//! ```

pub mod catalog;
pub mod error;
pub mod expand;
pub mod filter;
pub mod motion;
pub mod theme;
pub mod timer;
pub mod types;
pub mod typing;
pub mod view_state;

// Re-exports
pub use catalog::{Catalog, DEFAULT_CATALOG};
pub use error::{PortfolioError, PortfolioResult};
pub use expand::ExpandedProject;
pub use filter::ProjectFilter;
pub use motion::{Easing, Transition};
pub use theme::ThemeToggle;
pub use timer::{schedule_once, TimerHandle};
pub use types::*;
pub use typing::{TypingAnimator, TypingSession, DEFAULT_TYPING_DELAY};
pub use view_state::ViewState;
