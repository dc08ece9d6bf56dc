//! Project Card Component
//!
//! Gallery card with title, summary and category badge. A "Show more" toggle
//! reveals the long description, technology tags and the project link.

use dioxus::prelude::*;
use portfolio_core::motion::{CARD_ENTER, DETAILS_REVEAL};
use portfolio_core::{ExpandedProject, Project};

use super::button::{Button, ButtonVariant};

/// Properties for the ProjectCard component
#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    pub project: Project,
    /// Whether this card is the expanded one
    pub expanded: bool,
    /// Called with the project title when the toggle is clicked
    pub on_toggle: EventHandler<String>,
}

/// Label and chevron glyph of the expand toggle
pub fn toggle_label(expanded: bool) -> (&'static str, &'static str) {
    if expanded {
        ("Show less", "\u{25B4}")
    } else {
        ("Show more", "\u{25BE}")
    }
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let (label, chevron) = toggle_label(props.expanded);
    let enter = CARD_ENTER.animation("card-enter");
    let reveal = DETAILS_REVEAL.animation("details-reveal");
    let on_toggle = props.on_toggle;

    rsx! {
        article { class: "project-card", style: "animation: {enter};",
            div { class: "project-card-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                span { class: "category-badge", "{project.category}" }

                div {
                    Button {
                        variant: ButtonVariant::Link,
                        class: "card-toggle".to_string(),
                        aria_expanded: props.expanded,
                        onclick: move |_| on_toggle.call(project.title.to_string()),
                        "{label}"
                        span { class: "chevron", "{chevron}" }
                    }
                }

                if props.expanded {
                    div { class: "project-details", style: "animation: {reveal};",
                        p { class: "project-description", "{project.long_description}" }
                        div { class: "tech-section",
                            h4 { class: "tech-heading", "Technologies used:" }
                            div { class: "tech-tags",
                                for tech in project.technologies.iter() {
                                    span { key: "{tech}", class: "tech-tag", "{tech}" }
                                }
                            }
                        }
                        a {
                            class: "project-link",
                            href: "{project.link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "View Project "
                            span { class: "external-icon", "\u{2197}" }
                        }
                    }
                }
            }
        }
    }
}

/// Two-column grid of project cards
#[derive(Clone, PartialEq, Props)]
pub struct ProjectGalleryProps {
    /// Projects to show, already filtered
    pub projects: Vec<Project>,
    /// Which card, if any, shows its details
    #[props(default)]
    pub expanded: ExpandedProject,
    pub on_toggle: EventHandler<String>,
}

#[component]
pub fn ProjectGallery(props: ProjectGalleryProps) -> Element {
    rsx! {
        div { class: "project-grid",
            for project in props.projects.iter().copied() {
                ProjectCard {
                    key: "{project.title}",
                    project,
                    expanded: props.expanded.is_expanded(project.title),
                    on_toggle: props.on_toggle,
                }
            }
        }
    }
}
