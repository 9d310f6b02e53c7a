//! Global configuration constants.
//!
//! Runtime configuration is handled via CLI arguments and environment
//! variables in `main.rs`.

/// Number of recommendations returned when the caller does not ask for a count.
pub const DEFAULT_TOP_N: usize = 5;

/// Environment variable naming a JSON catalog file to load instead of the built-in sample.
pub const CATALOG_ENV: &str = "MOVIE_RECOMMENDER_CATALOG";

/// Log directive applied when `RUST_LOG` is unset.
/// Kept at `warn` so build milestones do not interleave with console output.
pub const DEFAULT_LOG_DIRECTIVE: &str = "movie_recommender=warn";

/// Minimum token length in characters kept by the analyzer.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Valid movie ratings, inclusive.
pub const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Tolerance used when checking that self-similarity is 1.0.
pub const SELF_SIMILARITY_TOLERANCE: f64 = 1e-9;
