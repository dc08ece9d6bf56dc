//! Core types for the portfolio

use std::fmt;
use std::str::FromStr;

use crate::error::PortfolioError;

/// Project category used by the gallery filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FullStack,
    Frontend,
    Mobile,
    Data,
}

impl Category {
    /// Display label, also the string form accepted by [`Category::from_str`]
    pub fn label(&self) -> &'static str {
        match self {
            Category::FullStack => "Full Stack",
            Category::Frontend => "Frontend",
            Category::Mobile => "Mobile",
            Category::Data => "Data",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &[
            Category::FullStack,
            Category::Frontend,
            Category::Mobile,
            Category::Data,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| PortfolioError::UnknownCategory(s.to_string()))
    }
}

/// Gallery filter: everything, or exactly one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => Self::ALL_LABEL,
            Filter::Only(category) => category.label(),
        }
    }

    /// Every selectable filter, "All" first, as shown in the pill row
    pub fn options() -> Vec<Filter> {
        std::iter::once(Filter::All)
            .chain(Category::all().iter().copied().map(Filter::Only))
            .collect()
    }

    /// Whether a project of `category` passes this filter
    pub fn admits(&self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Filter {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

/// A showcased project. Titles are unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub link: &'static str,
    pub category: Category,
    pub technologies: &'static [&'static str],
}

/// A skill with a proficiency level in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

impl Skill {
    /// Level clamped to 0..=100, used as the bar width
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

/// Owner details shown in the hero, contact section and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub pitch: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn copyright_line(&self, year: i32) -> String {
        format!("\u{00A9} {} {}. All rights reserved.", year, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_roundtrip() {
        for category in Category::all() {
            let parsed: Category = category.label().parse().unwrap();
            assert_eq!(parsed, *category);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = "Backend".parse::<Category>().unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownCategory(ref s) if s == "Backend"));
    }

    #[test]
    fn test_filter_options_order() {
        let labels: Vec<&str> = Filter::options().iter().map(Filter::label).collect();
        assert_eq!(labels, vec!["All", "Full Stack", "Frontend", "Mobile", "Data"]);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("All".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!(
            "Mobile".parse::<Filter>().unwrap(),
            Filter::Only(Category::Mobile)
        );
        assert!("all".parse::<Filter>().is_err());
    }

    #[test]
    fn test_filter_admits() {
        assert!(Filter::All.admits(Category::Data));
        assert!(Filter::Only(Category::Data).admits(Category::Data));
        assert!(!Filter::Only(Category::Data).admits(Category::Mobile));
    }

    #[test]
    fn test_skill_percent_clamped() {
        let skill = Skill { name: "Overclocked", level: 140 };
        assert_eq!(skill.percent(), 100);
    }

    #[test]
    fn test_profile_links() {
        let profile = Profile {
            name: "Ada",
            role: "Engineer",
            pitch: "",
            email: "ada@example.com",
            github_url: "",
            linkedin_url: "",
        };
        assert_eq!(profile.mailto(), "mailto:ada@example.com");
        assert_eq!(
            profile.copyright_line(2026),
            "\u{00A9} 2026 Ada. All rights reserved."
        );
    }
}
