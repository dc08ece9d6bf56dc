//! Contact links: e-mail plus external profiles.

use dioxus::prelude::*;
use portfolio_core::motion::LINKS_REVEAL;
use portfolio_core::Profile;

#[component]
pub fn SocialLinks(profile: Profile) -> Element {
    let mailto = profile.mailto();
    let reveal = LINKS_REVEAL.animation("fade-in");

    rsx! {
        div { class: "social-links", style: "animation: {reveal};",
            a { class: "social-link", href: "{mailto}",
                span { class: "social-icon", "\u{2709}" }
                "{profile.email}"
            }
            // External profiles open in a new browsing context.
            a {
                class: "social-link",
                href: "{profile.github_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                span { class: "social-icon", "\u{2325}" }
                "GitHub"
            }
            a {
                class: "social-link",
                href: "{profile.linkedin_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                span { class: "social-icon", "in" }
                "LinkedIn"
            }
        }
    }
}
