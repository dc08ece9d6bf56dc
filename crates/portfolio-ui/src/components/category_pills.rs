//! Category Pills Component
//!
//! Horizontal row of filter pills above the project gallery.
//! The selected pill is filled with the accent color.

use dioxus::prelude::*;
use portfolio_core::Filter;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Selectable filters, in display order
    #[props(default = Filter::options())]
    pub options: Vec<Filter>,
    /// Currently selected filter
    pub selected: Filter,
    /// Handler called when a pill is clicked
    pub on_select: EventHandler<Filter>,
}

pub fn pill_class(is_selected: bool) -> &'static str {
    if is_selected {
        "pill selected"
    } else {
        "pill"
    }
}

/// Displays the gallery filters as a radio group of pills
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategoryPills {
///         selected: state.read().active_filter(),
///         on_select: move |filter| state.write().set_filter(filter),
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let selected = props.selected;

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Filter projects by category",
            for filter in props.options.iter().copied() {
                {
                    let is_selected = selected == filter;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: pill_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(filter),
                            "{filter}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_class_marks_selection() {
        assert_eq!(pill_class(true), "pill selected");
        assert_eq!(pill_class(false), "pill");
    }

    #[test]
    fn default_options_start_with_all() {
        let options = Filter::options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], Filter::All);
    }
}
