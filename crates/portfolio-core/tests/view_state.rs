//! View-state behavior tests
//!
//! Scenario and property tests for filtering, card expansion and theming.

use portfolio_core::catalog::PROJECTS;
use portfolio_core::{Catalog, Category, ExpandedProject, Filter, ViewState};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::all().to_vec())
}

fn filter_strategy() -> impl Strategy<Value = Filter> {
    prop::sample::select(Filter::options())
}

fn title_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>())
}

/// User actions on the page
#[derive(Debug, Clone)]
enum Action {
    SetFilter(Filter),
    Toggle(&'static str),
    ToggleTheme,
}

fn actions_strategy(max: usize) -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            2 => filter_strategy().prop_map(Action::SetFilter),
            3 => title_strategy().prop_map(Action::Toggle),
            1 => Just(Action::ToggleTheme),
        ],
        0..max,
    )
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn initial_load() {
    let state = ViewState::new(Catalog::default());
    assert_eq!(state.active_filter(), Filter::All);
    assert_eq!(state.expanded(), &ExpandedProject::Collapsed);
    assert!(!state.theme().is_dark());
    assert_eq!(state.visible_projects().len(), 4);
}

#[test]
fn mobile_filter_shows_task_manager_only() {
    let mut state = ViewState::default();
    state.set_filter_label("Mobile").unwrap();

    let titles: Vec<&str> = state.visible_projects().iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["Task Manager"]);
}

#[test]
fn all_after_category_restores_full_list() {
    let mut state = ViewState::default();
    state.set_filter(Filter::Only(Category::Data));
    state.set_filter_label("All").unwrap();
    assert_eq!(state.visible_projects().len(), 4);
}

#[test]
fn expanding_second_card_collapses_first() {
    let mut state = ViewState::default();
    state.toggle_project("E-commerce Platform").unwrap();
    state.toggle_project("Data Visualization Dashboard").unwrap();

    assert_eq!(
        state.expanded(),
        &ExpandedProject::Expanded("Data Visualization Dashboard".to_string())
    );
    assert!(!state.is_expanded("E-commerce Platform"));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A category filter admits exactly the projects of that category, in order
    #[test]
    fn category_filter_is_exact(category in category_strategy()) {
        let mut state = ViewState::default();
        state.set_filter(Filter::Only(category));

        let visible: Vec<&str> = state.visible_projects().iter().map(|p| p.title).collect();
        let expected: Vec<&str> = PROJECTS
            .iter()
            .filter(|p| p.category == category)
            .map(|p| p.title)
            .collect();
        prop_assert_eq!(visible, expected);
    }

    /// Toggling the same card twice returns to collapsed
    #[test]
    fn toggle_twice_collapses(title in title_strategy()) {
        let mut state = ViewState::default();
        state.toggle_project(title).unwrap();
        state.toggle_project(title).unwrap();
        prop_assert_eq!(state.expanded(), &ExpandedProject::Collapsed);
    }

    /// Toggling two different cards leaves only the second expanded
    #[test]
    fn toggle_distinct_keeps_last(a in title_strategy(), b in title_strategy()) {
        prop_assume!(a != b);
        let mut state = ViewState::default();
        state.toggle_project(a).unwrap();
        state.toggle_project(b).unwrap();
        prop_assert_eq!(state.expanded().title(), Some(b));
    }

    /// Theme toggle is an involution from either starting theme
    #[test]
    fn theme_toggle_involution(dark in any::<bool>()) {
        let mut state = ViewState::default().with_dark_mode(dark);
        state.toggle_theme();
        state.toggle_theme();
        prop_assert_eq!(state.theme().is_dark(), dark);
    }

    /// Invariants hold after any sequence of user actions
    #[test]
    fn invariants_hold(actions in actions_strategy(40)) {
        let mut state = ViewState::default();
        for action in actions {
            match action {
                Action::SetFilter(filter) => state.set_filter(filter),
                Action::Toggle(title) => state.toggle_project(title).unwrap(),
                Action::ToggleTheme => state.toggle_theme(),
            }

            if let Some(title) = state.expanded().title() {
                prop_assert!(state.catalog().contains_project(title));
            }
            prop_assert!(Filter::options().contains(&state.active_filter()));
            prop_assert!(state
                .visible_projects()
                .iter()
                .all(|p| state.active_filter().admits(p.category)));
        }
    }
}
