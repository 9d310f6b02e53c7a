pub mod shared;

use serde::Serialize;

use crate::{
    catalog::{features, Catalog, MovieRecord},
    error::{RecommendError, Result},
    similarity::{hits::Hits, SimilarityMatrix},
    vectorizer::TFIDFVectorizer,
};

/// A recommended movie with its similarity to the queried title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub genre: String,
    pub director: String,
    pub rating: f64,
    pub year: i32,
    pub score: f64,
}

impl Recommendation {
    fn from_record(record: &MovieRecord, score: f64) -> Self {
        Self {
            title: record.title.clone(),
            genre: record.genre.clone(),
            director: record.director.clone(),
            rating: record.rating,
            year: record.year,
            score,
        }
    }
}

/// Immutable bundle of catalog, term vectors and similarity matrix.
///
/// Built once by [`SimilarityIndex::build`] and passed to every query.
/// Queries only read, so an index can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    catalog: Catalog,
    vectorizer: TFIDFVectorizer<f64>,
    matrix: SimilarityMatrix,
}

impl SimilarityIndex {
    /// Catalog → feature text → TF-IDF vectors → similarity matrix.
    ///
    /// # Errors
    /// `InvalidArgument` on an empty catalog.
    pub fn build(catalog: Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(RecommendError::InvalidArgument(
                "cannot build an index over an empty catalog".to_string(),
            ));
        }

        let feature_texts = features::synthesize(&catalog);
        tracing::debug!(movies = feature_texts.len(), "synthesized feature text");

        let vectorizer = TFIDFVectorizer::<f64>::fit(&feature_texts);
        let (docs, vocab) = vectorizer.shape();
        tracing::info!(docs, vocab, "built tf-idf feature matrix");

        let matrix = SimilarityMatrix::build(vectorizer.vectors());
        let (rows, cols) = matrix.shape();
        tracing::info!(rows, cols, "built similarity matrix");

        Ok(Self {
            catalog,
            vectorizer,
            matrix,
        })
    }

    pub fn resolve_title(&self, title: &str) -> Result<usize> {
        self.catalog.resolve_title(title)
    }

    /// Ranked neighbours of the movie at `query`
    pub fn rank(&self, query: usize, top_n: i64) -> Result<Hits<usize>> {
        self.matrix.rank(query, top_n)
    }

    /// The `top_n` movies most similar to `title`, best first.
    ///
    /// # Errors
    /// * `NotFound("movie not found")` when `title` has no exact match
    /// * `InvalidArgument` when `top_n` is negative
    pub fn recommend(&self, title: &str, top_n: i64) -> Result<Vec<Recommendation>> {
        let query = self.resolve_title(title)?;
        let hits = self.rank(query, top_n)?;
        hits.into_iter()
            .map(|hit| {
                self.catalog
                    .get(hit.key)
                    .map(|record| Recommendation::from_record(record, hit.score))
                    .ok_or_else(|| RecommendError::NotFound(format!("index {} not in catalog", hit.key)))
            })
            .collect()
    }

    /// Similarity between two titles
    pub fn score(&self, a: &str, b: &str) -> Result<f64> {
        let i = self.resolve_title(a)?;
        let j = self.resolve_title(b)?;
        self.matrix
            .get(i, j)
            .ok_or_else(RecommendError::movie_not_found)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    pub fn vectorizer(&self) -> &TFIDFVectorizer<f64> {
        &self.vectorizer
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

/// Free-function form of [`SimilarityIndex::build`]
pub fn build_index(catalog: Catalog) -> Result<SimilarityIndex> {
    SimilarityIndex::build(catalog)
}

/// Free-function form of [`SimilarityIndex::recommend`]
pub fn recommend(index: &SimilarityIndex, title: &str, top_n: i64) -> Result<Vec<Recommendation>> {
    index.recommend(title, top_n)
}
