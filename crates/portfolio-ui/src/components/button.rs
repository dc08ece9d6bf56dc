//! Button Components
//!
//! Button styles used across the page:
//! - Primary: filled accent pill for calls to action
//! - Link: inline text button, e.g. "Show more"
//! - Icon: round button holding a single glyph

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled accent background, white bold text
    #[default]
    Primary,
    /// Accent-colored text without background
    Link,
    /// Round neutral background, sized for a glyph
    Icon,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Link => "btn-link",
            ButtonVariant::Icon => "btn-icon",
        }
    }
}

/// Join a base class with optional extra classes
pub fn merge_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Accessible label, for buttons whose content is not descriptive text
    #[props(default)]
    pub aria_label: Option<String>,
    /// Whether the control it toggles is currently open
    #[props(default)]
    pub aria_expanded: Option<bool>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Link,
///         onclick: move |_| on_toggle.call(()),
///         "Show more"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = merge_classes(props.variant.class(), props.class.as_deref());
    let expanded = props.aria_expanded.map(|open| if open { "true" } else { "false" });

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            "aria-label": props.aria_label.clone(),
            "aria-expanded": expanded,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
