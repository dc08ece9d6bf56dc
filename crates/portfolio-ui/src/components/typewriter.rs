//! Typewriter text with a blinking caret while typing.
//!
//! Purely presentational: the page container runs the `TypingSession` and
//! passes the revealed prefix in.

use dioxus::prelude::*;
use portfolio_core::TypingAnimator;

#[component]
pub fn Typewriter(
    /// Revealed prefix of the target text
    text: String,
    /// Whether more characters are still to come
    #[props(default = false)]
    typing: bool,
) -> Element {
    rsx! {
        span { class: "typewriter",
            span { class: "typewriter-text", "{text}" }
            if typing {
                span { class: "typewriter-caret", "aria-hidden": "true", "|" }
            }
        }
    }
}

/// Typewriter driven directly by an animator snapshot
#[component]
pub fn TypewriterFrame(frame: TypingAnimator) -> Element {
    rsx! {
        Typewriter {
            text: frame.displayed().to_string(),
            typing: !frame.is_complete(),
        }
    }
}
