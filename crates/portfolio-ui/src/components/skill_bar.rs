//! Skill Bar Component
//!
//! Name, percentage and a progress bar whose fill grows from zero to the
//! skill level when the bar mounts.

use dioxus::prelude::*;
use portfolio_core::motion::SKILL_FILL;
use portfolio_core::Skill;

/// Inline style for the fill: final width plus the grow-in animation
pub fn fill_style(skill: &Skill) -> String {
    let percent = skill.percent();
    format!(
        "--skill-level: {}%; width: {}%; animation: {};",
        percent,
        percent,
        SKILL_FILL.animation("skill-fill")
    )
}

#[component]
pub fn SkillBar(skill: Skill) -> Element {
    let percent = skill.percent();
    let style = fill_style(&skill);

    rsx! {
        div { class: "skill-bar",
            div { class: "skill-bar-header",
                span { class: "skill-name", "{skill.name}" }
                span { class: "skill-level", "{percent}%" }
            }
            div {
                class: "skill-track",
                role: "progressbar",
                "aria-label": "{skill.name}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{percent}",
                div { class: "skill-fill", style: "{style}" }
            }
        }
    }
}

/// Grid of skill bars
#[component]
pub fn SkillGrid(skills: Vec<Skill>) -> Element {
    rsx! {
        div { class: "skill-grid",
            for skill in skills {
                SkillBar { key: "{skill.name}", skill }
            }
        }
    }
}
