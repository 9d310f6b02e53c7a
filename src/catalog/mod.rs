pub mod features;
mod sample;

use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::RATING_RANGE;
use crate::error::{RecommendError, Result};

/// One movie. Missing text fields deserialize as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub tags: String,
}

impl MovieRecord {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        director: impl Into<String>,
        rating: f64,
        year: i32,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            director: director.into(),
            rating,
            year,
            tags: tags.into(),
        }
    }
}

/// Ordered, validated, read-only movie collection.
/// Titles are unique and non-empty; catalog order defines movie indices.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    by_title: IndexMap<String, usize>,
}

impl Catalog {
    /// Validate and index `records`.
    ///
    /// # Errors
    /// `InvalidArgument` on an empty or duplicated title, or a rating outside 0-10.
    pub fn new(records: Vec<MovieRecord>) -> Result<Self> {
        let mut by_title = IndexMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if record.title.trim().is_empty() {
                return Err(RecommendError::InvalidArgument(format!(
                    "movie at position {idx} has an empty title"
                )));
            }
            if !RATING_RANGE.contains(&record.rating) {
                return Err(RecommendError::InvalidArgument(format!(
                    "rating of {} must be within 0-10, got {}",
                    record.title, record.rating
                )));
            }
            if by_title.insert(record.title.clone(), idx).is_some() {
                return Err(RecommendError::InvalidArgument(format!(
                    "duplicate title: {}",
                    record.title
                )));
            }
        }
        Ok(Self { records, by_title })
    }

    /// The built-in 16-movie sample table
    pub fn sample() -> Self {
        let records = sample::records();
        let by_title = records
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.title.clone(), idx))
            .collect();
        Self { records, by_title }
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<MovieRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), movies = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Case-sensitive exact lookup.
    ///
    /// # Errors
    /// `NotFound("movie not found")` when no title matches.
    pub fn resolve_title(&self, title: &str) -> Result<usize> {
        self.by_title
            .get(title)
            .copied()
            .ok_or_else(RecommendError::movie_not_found)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.records.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_sixteen_unique_titles() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 16);
        assert!(Catalog::new(catalog.records().to_vec()).is_ok());
        assert_eq!(catalog.resolve_title("Gladiator").unwrap(), 15);
    }

    #[test]
    fn resolve_is_case_sensitive() {
        let catalog = Catalog::sample();
        assert!(catalog.resolve_title("Se7en").is_ok());
        assert!(catalog.resolve_title("se7en").unwrap_err().is_not_found());
        assert!(catalog.resolve_title("Nonexistent Movie").unwrap_err().is_not_found());
    }

    #[test]
    fn rejects_duplicate_and_empty_titles() {
        let dup = vec![
            MovieRecord::new("Heat", "Crime", "Michael Mann", 8.3, 1995, "heist"),
            MovieRecord::new("Heat", "Crime", "Michael Mann", 8.3, 1995, "heist"),
        ];
        assert!(matches!(Catalog::new(dup), Err(RecommendError::InvalidArgument(_))));

        let empty = vec![MovieRecord::new("  ", "Drama", "Nobody", 1.0, 2000, "x")];
        assert!(matches!(Catalog::new(empty), Err(RecommendError::InvalidArgument(_))));
    }

    #[test]
    fn rejects_ratings_outside_zero_to_ten() {
        for rating in [-3.0, 10.5, 42.0, f64::NAN] {
            let records = vec![MovieRecord::new("Heat", "Crime", "Michael Mann", rating, 1995, "heist")];
            assert!(matches!(Catalog::new(records), Err(RecommendError::InvalidArgument(_))));
        }
        let edges = vec![
            MovieRecord::new("Worst", "Drama", "Nobody", 0.0, 2000, "x1"),
            MovieRecord::new("Best", "Drama", "Nobody", 10.0, 2000, "x2"),
        ];
        assert!(Catalog::new(edges).is_ok());
        assert!(Catalog::from_json_str(r#"[{"title": "Heat", "rating": 42}]"#).is_err());
    }

    #[test]
    fn json_missing_fields_default_to_empty() {
        let catalog = Catalog::from_json_str(r#"[{"title": "Alien", "genre": "Sci-Fi"}]"#).unwrap();
        let alien = catalog.get(0).unwrap();
        assert_eq!(alien.director, "");
        assert_eq!(alien.tags, "");
        assert_eq!(alien.genre, "Sci-Fi");
    }

    #[test]
    fn json_errors_are_typed() {
        assert!(matches!(Catalog::from_json_str("{"), Err(RecommendError::Json(_))));
        assert!(matches!(
            Catalog::from_json_file("/definitely/not/here.json"),
            Err(RecommendError::Io(_))
        ));
    }
}
