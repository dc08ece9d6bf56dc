//! Project gallery filter.

use crate::types::{Filter, Project};

/// Holds the selected gallery filter. Selecting replaces the previous choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    active: Filter,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Filter {
        self.active
    }

    pub fn set(&mut self, filter: Filter) {
        self.active = filter;
    }

    /// Projects admitted by the active filter, in source order.
    ///
    /// Always derived from `projects`; nothing is cached between calls.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|p| self.active.admits(p.category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PROJECTS;
    use crate::types::Category;

    #[test]
    fn test_default_is_all() {
        let filter = ProjectFilter::new();
        assert_eq!(filter.active(), Filter::All);
        assert_eq!(filter.visible(PROJECTS).len(), PROJECTS.len());
    }

    #[test]
    fn test_set_replaces_selection() {
        let mut filter = ProjectFilter::new();
        filter.set(Filter::Only(Category::Data));
        filter.set(Filter::Only(Category::Frontend));

        let titles: Vec<&str> = filter.visible(PROJECTS).iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Weather App"]);
    }

    #[test]
    fn test_visible_preserves_order() {
        let mut filter = ProjectFilter::new();
        filter.set(Filter::All);
        let titles: Vec<&str> = filter.visible(PROJECTS).iter().map(|p| p.title).collect();
        let expected: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_empty_source() {
        let mut filter = ProjectFilter::new();
        filter.set(Filter::Only(Category::Mobile));
        assert!(filter.visible(&[]).is_empty());
    }
}
