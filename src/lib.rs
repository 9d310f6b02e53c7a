/// This crate is a content-based Movie Recommender built on a TF-IDF Vectorizer.
pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod similarity;
pub mod utils;
pub mod vectorizer;

/// Similarity Index
/// The top-level struct of this crate. It bundles:
/// - The validated movie catalog
/// - One L2-normalized TF-IDF vector per movie
/// - The all-pairs cosine similarity matrix
///
/// It is built once with `build_index` (or `SimilarityIndex::build`) and is
/// immutable afterwards; every query takes it by reference.
///
/// # Errors
/// Building fails with `InvalidArgument` on an empty catalog.
/// `recommend` fails with `NotFound` for an unknown title and with
/// `InvalidArgument` for a negative count.
pub use index::{build_index, recommend, Recommendation, SimilarityIndex};

/// Shared Index
/// Holds the current `SimilarityIndex` behind an `Arc` and swaps in a fully
/// built replacement on rebuild.
pub use index::shared::SharedIndex;

/// Catalog and Movie Record
/// `Catalog` is an ordered collection of `MovieRecord` with unique, non-empty
/// titles. A built-in sample table and JSON loading are provided.
pub use catalog::{Catalog, MovieRecord};

/// TF-IDF Vectorizer
/// Fits an ordered document list into a sorted vocabulary, an IDF vector and
/// one L2-normalized sparse vector per document.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: Float type of the weights (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
pub use vectorizer::{TFIDFVectorizer, TermVector};

/// TF IDF Calculation Engine Trait
/// Plug a different weighting strategy into `TFIDFVectorizer<N, E>`.
/// `DefaultTFIDFEngine` uses raw term counts and smoothed IDF
/// `ln((1 + N) / (1 + df)) + 1`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Term Frequency structure
/// Raw per-document term counts, the base data for TF.
pub use vectorizer::term::TermFrequency;

/// Corpus
/// Document count and per-term document frequency, the base data for IDF.
pub use vectorizer::corpus::Corpus;

/// Similarity Matrix
/// Symmetric N×N cosine similarity with diagonal 1.0 and a ranked lookup by row.
pub use similarity::SimilarityMatrix;

/// Hits and Hit Entry structures
/// - `Hits`: ranked result list, sortable by score
/// - `HitEntry`: one result, its key and score
pub use similarity::hits::{HitEntry, Hits};

pub use error::{RecommendError, Result};
