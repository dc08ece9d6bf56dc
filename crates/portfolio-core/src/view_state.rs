//! Page view state.
//!
//! One `ViewState` exists per page session. It is owned by the page container
//! and mutated only through the methods below, one method per user action.

use std::time::Duration;

use crate::catalog::Catalog;
use crate::error::{PortfolioError, PortfolioResult};
use crate::expand::ExpandedProject;
use crate::filter::ProjectFilter;
use crate::theme::ThemeToggle;
use crate::types::{Filter, Project};
use crate::typing::{TypingAnimator, DEFAULT_TYPING_DELAY};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    catalog: Catalog,
    theme: ThemeToggle,
    filter: ProjectFilter,
    expanded: ExpandedProject,
    typing: TypingAnimator,
}

impl ViewState {
    /// Initial state: light theme, all projects, nothing expanded, role line
    /// not yet typed
    pub fn new(catalog: Catalog) -> Self {
        Self {
            typing: TypingAnimator::new(catalog.profile.role, DEFAULT_TYPING_DELAY),
            catalog,
            theme: ThemeToggle::default(),
            filter: ProjectFilter::new(),
            expanded: ExpandedProject::default(),
        }
    }

    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.theme = ThemeToggle::new(dark_mode);
        self
    }

    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing = TypingAnimator::new(self.catalog.profile.role, delay);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn theme(&self) -> ThemeToggle {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        tracing::debug!(dark_mode = self.theme.is_dark(), "Theme toggled");
    }

    pub fn active_filter(&self) -> Filter {
        self.filter.active()
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter.set(filter);
        tracing::debug!(filter = %filter, "Filter selected");
    }

    /// Select a filter by its label ("All" or a category label)
    pub fn set_filter_label(&mut self, label: &str) -> PortfolioResult<()> {
        let filter = label.parse()?;
        self.set_filter(filter);
        Ok(())
    }

    /// Catalog projects admitted by the active filter, in catalog order
    pub fn visible_projects(&self) -> Vec<&'static Project> {
        self.filter.visible(self.catalog.projects)
    }

    pub fn expanded(&self) -> &ExpandedProject {
        &self.expanded
    }

    pub fn is_expanded(&self, title: &str) -> bool {
        self.expanded.is_expanded(title)
    }

    /// Expand or collapse the card for `title`.
    ///
    /// Titles not in the catalog are rejected and leave the state unchanged.
    pub fn toggle_project(&mut self, title: &str) -> PortfolioResult<()> {
        if !self.catalog.contains_project(title) {
            return Err(PortfolioError::UnknownProject(title.to_string()));
        }
        self.expanded.toggle(title);
        tracing::debug!(expanded = ?self.expanded.title(), "Project card toggled");
        Ok(())
    }

    pub fn typing(&self) -> &TypingAnimator {
        &self.typing
    }

    /// Replace the typing animator with a snapshot published by a running
    /// session. Snapshots for a different target are ignored.
    pub fn apply_typing_frame(&mut self, frame: TypingAnimator) {
        if frame.target() == self.typing.target() {
            self.typing = frame;
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}
