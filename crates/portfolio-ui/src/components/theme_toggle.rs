//! Theme toggle button for the page header.

use dioxus::prelude::*;
use portfolio_core::ThemeToggle;

use super::button::{Button, ButtonVariant};

/// Round button showing a sun in dark mode and a moon in light mode
#[component]
pub fn ThemeToggleButton(theme: ThemeToggle, on_toggle: EventHandler<()>) -> Element {
    let icon = theme.icon();

    rsx! {
        Button {
            variant: ButtonVariant::Icon,
            class: "theme-toggle".to_string(),
            aria_label: theme.toggle_label().to_string(),
            onclick: move |_| on_toggle.call(()),
            span { class: "theme-icon", "{icon}" }
        }
    }
}
