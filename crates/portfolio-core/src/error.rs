//! Error types for the portfolio core

use thiserror::Error;

/// Rejected view-state transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// Filter label is neither "All" nor a known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Title does not match any project in the catalog
    #[error("Project not found: {0}")]
    UnknownProject(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::UnknownProject("Blog Engine".to_string());
        assert_eq!(format!("{}", err), "Project not found: Blog Engine");

        let err = PortfolioError::UnknownCategory("Backend".to_string());
        assert_eq!(format!("{}", err), "Unknown category: Backend");
    }
}
