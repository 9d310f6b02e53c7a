//! Error types for recommender operations.

use thiserror::Error;

/// Errors surfaced by catalog loading, index building and queries.
///
/// `NotFound` and `InvalidArgument` are the two query-time failures and are
/// always distinguishable from an empty result.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// A title or index is absent from the catalog.
    #[error("{0}")]
    NotFound(String),

    /// Negative `top_n`, an empty catalog, or a catalog that fails validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecommendError {
    /// The error raised for an unknown movie title.
    pub fn movie_not_found() -> Self {
        RecommendError::NotFound("movie not found".to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RecommendError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_plain() {
        let err = RecommendError::movie_not_found();
        assert_eq!(err.to_string(), "movie not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn invalid_argument_is_not_not_found() {
        let err = RecommendError::InvalidArgument("top_n must be >= 0, got -1".into());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("top_n"));
    }
}
