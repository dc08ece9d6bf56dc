//! Declarative animation parameters.
//!
//! Each page element gets a named [`Transition`]; the UI renders them into CSS
//! `transition` and `animation` shorthands.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Duration, start delay and easing of one animated property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::ZERO,
            easing,
        }
    }

    pub const fn delayed(self, delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            ..self
        }
    }

    /// `transition` value for `property`, e.g. `width 1000ms ease-out 0ms`
    pub fn css(&self, property: &str) -> String {
        format!(
            "{} {}ms {} {}ms",
            property,
            self.duration.as_millis(),
            self.easing.css(),
            self.delay.as_millis()
        )
    }

    /// `animation` value for keyframes `name`; `both` holds the first frame
    /// through the delay and the last one afterwards
    pub fn animation(&self, name: &str) -> String {
        format!(
            "{} {}ms {} {}ms both",
            name,
            self.duration.as_millis(),
            self.easing.css(),
            self.delay.as_millis()
        )
    }
}

/// Hero block fades in and rises
pub const HERO_REVEAL: Transition = Transition::new(500, Easing::Ease);
/// Skills grid fades in after the hero has started
pub const SKILLS_REVEAL: Transition = Transition::new(500, Easing::Ease).delayed(200);
/// Skill bar fill grows from zero to its level
pub const SKILL_FILL: Transition = Transition::new(1000, Easing::EaseOut);
/// Project card scales in when it enters the gallery
pub const CARD_ENTER: Transition = Transition::new(500, Easing::Ease);
/// Expanded card detail block
pub const DETAILS_REVEAL: Transition = Transition::new(300, Easing::Ease);
/// Contact links row
pub const LINKS_REVEAL: Transition = Transition::new(500, Easing::Ease).delayed(400);
/// Background and text colors when the theme flips
pub const THEME_FADE: Transition = Transition::new(300, Easing::Ease);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_css() {
        assert_eq!(SKILL_FILL.css("width"), "width 1000ms ease-out 0ms");
        assert_eq!(
            THEME_FADE.css("background-color"),
            "background-color 300ms ease 0ms"
        );
    }

    #[test]
    fn test_animation_css() {
        assert_eq!(SKILLS_REVEAL.animation("fade-in"), "fade-in 500ms ease 200ms both");
        assert_eq!(LINKS_REVEAL.delay, Duration::from_millis(400));
    }

    #[test]
    fn test_delayed_keeps_duration() {
        let t = Transition::new(250, Easing::Linear).delayed(50);
        assert_eq!(t.duration, Duration::from_millis(250));
        assert_eq!(t.easing, Easing::Linear);
    }
}
