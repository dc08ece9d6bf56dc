//! Launch-time context for the portfolio page.
//!
//! Options come from the command line and are read once, when the page
//! creates its `ViewState`.

use std::time::Duration;

use portfolio_core::{Catalog, ViewState, DEFAULT_TYPING_DELAY};

/// Options that shape the initial view state
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchOptions {
    /// Start in dark mode instead of light
    pub dark_mode: bool,
    /// Delay between typed characters in the hero line
    pub typing_delay: Duration,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            dark_mode: false,
            typing_delay: DEFAULT_TYPING_DELAY,
        }
    }
}

impl LaunchOptions {
    /// Fresh view state for a page session
    pub fn initial_view_state(&self, catalog: Catalog) -> ViewState {
        ViewState::new(catalog)
            .with_dark_mode(self.dark_mode)
            .with_typing_delay(self.typing_delay)
    }
}

/// Get the launch options set from command line args.
pub fn launch_options() -> LaunchOptions {
    crate::get_launch_options()
}
