//! Home page - the whole portfolio.
//!
//! Owns the page's `ViewState` and the hero typing session. Sections below
//! receive plain values and report user actions through event handlers.

use std::rc::Rc;

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_core::motion::{HERO_REVEAL, SKILLS_REVEAL, THEME_FADE};
use portfolio_core::{
    Catalog, ExpandedProject, Filter, Profile, Project, Skill, ThemeToggle, TypingAnimator,
    TypingSession, ViewState,
};
use portfolio_ui::{
    CategoryPills, ContactForm, ProjectGallery, SkillGrid, SocialLinks, ThemeToggleButton,
    TypewriterFrame,
};

use crate::context::launch_options;

/// Root class plus the theme scope
fn root_class(theme: ThemeToggle) -> String {
    match theme.scope_class() {
        "" => "portfolio".to_string(),
        scope => format!("portfolio {}", scope),
    }
}

fn root_style() -> String {
    format!(
        "transition: {}, {};",
        THEME_FADE.css("background-color"),
        THEME_FADE.css("color")
    )
}

/// Home page component.
#[component]
pub fn Home() -> Element {
    let mut state: Signal<ViewState> =
        use_signal(|| launch_options().initial_view_state(Catalog::default()));

    // Drive the hero typing animation; each frame lands in the view state.
    let session = use_hook(|| {
        let session = Rc::new(TypingSession::start(state.peek().typing().clone()));
        let mut frames = session.subscribe();
        spawn(async move {
            while frames.changed().await.is_ok() {
                let frame = frames.borrow_and_update().clone();
                state.write().apply_typing_frame(frame);
            }
        });
        session
    });
    // A pending timer must not outlive the page.
    use_drop(move || session.cancel());

    let (catalog, theme, filter, visible, expanded, typing) = {
        let view = state.read();
        (
            *view.catalog(),
            view.theme(),
            view.active_filter(),
            view.visible_projects().into_iter().copied().collect::<Vec<Project>>(),
            view.expanded().clone(),
            view.typing().clone(),
        )
    };

    let on_toggle_theme = move |_: ()| state.write().toggle_theme();
    let on_select = move |filter: Filter| state.write().set_filter(filter);
    let on_toggle_project = move |title: String| {
        if let Err(e) = state.write().toggle_project(&title) {
            tracing::warn!("Ignoring card toggle: {}", e);
        }
    };

    let class = root_class(theme);
    let style = root_style();

    rsx! {
        div { class: "{class}", style: "{style}",
            PageHeader { name: catalog.profile.name, theme, on_toggle_theme }

            main { class: "page-main",
                Hero { profile: catalog.profile, typing }
                SkillsSection { skills: catalog.skills.to_vec() }
                ProjectsSection {
                    filter,
                    projects: visible,
                    expanded,
                    on_select,
                    on_toggle: on_toggle_project,
                }
                ContactSection { profile: catalog.profile }
            }

            PageFooter { profile: catalog.profile }
        }
    }
}

#[component]
fn PageHeader(
    name: &'static str,
    theme: ThemeToggle,
    on_toggle_theme: EventHandler<()>,
) -> Element {
    rsx! {
        header { class: "page-header",
            nav { class: "nav",
                a { class: "nav-brand", href: "#", "{name}" }
                div { class: "nav-links",
                    a { class: "nav-link", href: "#skills", "Skills" }
                    a { class: "nav-link", href: "#projects", "Projects" }
                    a { class: "nav-link", href: "#contact", "Contact" }
                    ThemeToggleButton { theme, on_toggle: on_toggle_theme }
                }
            }
        }
    }
}

#[component]
fn Hero(profile: Profile, typing: TypingAnimator) -> Element {
    let reveal = HERO_REVEAL.animation("fade-up");

    rsx! {
        section { id: "hero", class: "section hero",
            div { class: "hero-content", style: "animation: {reveal};",
                h1 { class: "hero-title",
                    "Hi, I'm "
                    span { class: "accent", "{profile.name}" }
                }
                h2 { class: "hero-role",
                    "I'm a "
                    TypewriterFrame { frame: typing }
                }
                p { class: "hero-pitch", "{profile.pitch}" }
                a { class: "btn-primary hero-cta", href: "#contact",
                    "Get in touch "
                    span { class: "chevron", "\u{203A}" }
                }
            }
        }
    }
}

#[component]
fn SkillsSection(skills: Vec<Skill>) -> Element {
    let reveal = SKILLS_REVEAL.animation("fade-in");

    rsx! {
        section { id: "skills", class: "section",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-wrapper", style: "animation: {reveal};",
                SkillGrid { skills }
            }
        }
    }
}

#[component]
fn ProjectsSection(
    filter: Filter,
    projects: Vec<Project>,
    expanded: ExpandedProject,
    on_select: EventHandler<Filter>,
    on_toggle: EventHandler<String>,
) -> Element {
    rsx! {
        section { id: "projects", class: "section",
            h2 { class: "section-title", "Projects" }
            CategoryPills { selected: filter, on_select }
            ProjectGallery { projects, expanded, on_toggle }
        }
    }
}

#[component]
fn ContactSection(profile: Profile) -> Element {
    rsx! {
        section { id: "contact", class: "section",
            h2 { class: "section-title", "Get in Touch" }
            div { class: "contact-wrapper",
                ContactForm {}
            }
            SocialLinks { profile }
        }
    }
}

#[component]
fn PageFooter(profile: Profile) -> Element {
    let copyright = profile.copyright_line(chrono::Local::now().year());

    rsx! {
        footer { class: "page-footer",
            p { "{copyright}" }
            p { class: "footer-note", "Built with Rust, Dioxus and CSS animations" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_class_carries_theme_scope() {
        assert_eq!(root_class(ThemeToggle::new(false)), "portfolio");
        assert_eq!(root_class(ThemeToggle::new(true)), "portfolio dark");
    }

    #[test]
    fn root_style_transitions_colors() {
        let style = root_style();
        assert!(style.contains("background-color 300ms"));
        assert!(style.contains("color 300ms"));
    }
}
