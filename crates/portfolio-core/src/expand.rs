//! One-at-a-time expansion of project cards.

/// Which project card shows its detail block.
///
/// A single slot, so at most one card is ever expanded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExpandedProject {
    #[default]
    Collapsed,
    Expanded(String),
}

impl ExpandedProject {
    /// Collapse `title` if it is the expanded card, otherwise expand it.
    ///
    /// Expanding a different card replaces the previous one directly.
    pub fn toggle(&mut self, title: &str) {
        *self = match &*self {
            ExpandedProject::Expanded(current) if current == title => ExpandedProject::Collapsed,
            _ => ExpandedProject::Expanded(title.to_string()),
        };
    }

    pub fn is_expanded(&self, title: &str) -> bool {
        matches!(self, ExpandedProject::Expanded(current) if current == title)
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ExpandedProject::Collapsed => None,
            ExpandedProject::Expanded(title) => Some(title),
        }
    }

    pub fn collapse(&mut self) {
        *self = ExpandedProject::Collapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expands_then_collapses() {
        let mut expanded = ExpandedProject::default();
        expanded.toggle("Weather App");
        assert!(expanded.is_expanded("Weather App"));

        expanded.toggle("Weather App");
        assert_eq!(expanded, ExpandedProject::Collapsed);
    }

    #[test]
    fn test_toggle_other_switches_directly() {
        let mut expanded = ExpandedProject::Expanded("Weather App".to_string());
        expanded.toggle("Task Manager");

        assert_eq!(expanded.title(), Some("Task Manager"));
        assert!(!expanded.is_expanded("Weather App"));
    }

    #[test]
    fn test_collapse() {
        let mut expanded = ExpandedProject::Expanded("Task Manager".to_string());
        expanded.collapse();
        assert_eq!(expanded.title(), None);
    }
}
