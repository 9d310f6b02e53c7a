pub mod hits;

use std::ops::AddAssign;

use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::{RecommendError, Result},
    similarity::hits::{HitEntry, Hits},
    vectorizer::TermVector,
};

/// All-pairs cosine similarity over a fixed set of L2-normalized vectors.
///
/// Square, symmetric, row-major. Entry `(i, j)` is the dot product of
/// vectors `i` and `j`, clamped to `[0, 1]`; the diagonal is exactly 1.0.
/// Rebuilt from scratch, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the matrix. Rows of the upper triangle are computed in parallel
    /// and mirrored into the lower triangle.
    ///
    /// Cost is O(N² · nnz); this is the growth limit for large catalogs.
    pub fn build<N>(vectors: &[TermVector<N>]) -> Self
    where
        N: Float + AddAssign + Into<f64> + Send + Sync,
    {
        let size = vectors.len();
        let upper: Vec<Vec<f64>> = (0..size)
            .into_par_iter()
            .map(|i| {
                vectors[i + 1..]
                    .iter()
                    .map(|other| {
                        let dot: f64 = vectors[i].weights.dot(&other.weights);
                        dot.clamp(0.0, 1.0)
                    })
                    .collect()
            })
            .collect();

        let mut values = vec![0.0; size * size];
        for (i, row) in upper.into_iter().enumerate() {
            values[i * size + i] = 1.0;
            for (offset, score) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                values[i * size + j] = score;
                values[j * size + i] = score;
            }
        }

        tracing::debug!(size, "built similarity matrix");
        Self { size, values }
    }

    /// Number of rows (and columns)
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// (rows, columns)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.size || j >= self.size {
            return None;
        }
        Some(self.values[i * self.size + j])
    }

    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.size {
            return None;
        }
        Some(&self.values[i * self.size..(i + 1) * self.size])
    }

    /// Up to `top_n` entries of row `query`, excluding `query` itself,
    /// by descending score with ties broken by ascending index.
    /// Returns `min(top_n, N - 1)` hits.
    ///
    /// # Errors
    /// * `NotFound` if `query` is out of bounds
    /// * `InvalidArgument` if `top_n` is negative
    pub fn rank(&self, query: usize, top_n: i64) -> Result<Hits<usize>> {
        let top_n = usize::try_from(top_n).map_err(|_| {
            RecommendError::InvalidArgument(format!("top_n must be >= 0, got {top_n}"))
        })?;
        let row = self.row(query).ok_or_else(|| {
            RecommendError::NotFound(format!("index {query} out of bounds for {} movies", self.size))
        })?;

        let mut hits = Hits::new(
            row.iter()
                .enumerate()
                .filter(|&(idx, _)| idx != query)
                .map(|(idx, &score)| HitEntry { key: idx, score })
                .collect(),
        );
        hits.sort_by_score_desc().truncate(top_n);
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::TFIDFVectorizer;

    fn matrix(docs: &[&str]) -> SimilarityMatrix {
        let v = TFIDFVectorizer::<f64>::fit(docs);
        SimilarityMatrix::build(v.vectors())
    }

    #[test]
    fn diagonal_is_one_and_matrix_symmetric() {
        let m = matrix(&["crime mafia", "crime thriller dark", "space time", "the of"]);
        for i in 0..m.size() {
            assert_eq!(m.get(i, i), Some(1.0));
            for j in 0..m.size() {
                assert_eq!(m.get(i, j), m.get(j, i));
                let s = m.get(i, j).unwrap();
                assert!((0.0..=1.0).contains(&s));
            }
        }
        assert_eq!(m.get(0, 2), Some(0.0));
        assert!(m.get(0, 1).unwrap() > 0.0);
    }

    #[test]
    fn rank_excludes_query_and_orders_ties_by_index() {
        // docs 1..=3 share nothing with doc 0, so they tie at 0.0
        let m = matrix(&["alpha beta", "gamma", "delta", "epsilon", "alpha"]);
        let hits = m.rank(0, 10).unwrap();
        assert_eq!(hits.keys().copied().collect::<Vec<_>>(), vec![4, 1, 2, 3]);
        assert!(hits.iter().all(|e| e.key != 0));
    }

    #[test]
    fn rank_size_is_min_of_top_n_and_others() {
        let m = matrix(&["a1 b1", "b1 c1", "c1 d1"]);
        assert_eq!(m.rank(1, 0).unwrap().len(), 0);
        assert_eq!(m.rank(1, 1).unwrap().len(), 1);
        assert_eq!(m.rank(1, 5).unwrap().len(), 2);
    }

    #[test]
    fn rank_rejects_bad_arguments() {
        let m = matrix(&["crime", "drama"]);
        assert!(matches!(m.rank(2, 1), Err(RecommendError::NotFound(_))));
        assert!(matches!(m.rank(0, -1), Err(RecommendError::InvalidArgument(_))));
    }

    #[test]
    fn single_movie_ranks_empty() {
        let m = matrix(&["prison hope"]);
        assert!(m.rank(0, 5).unwrap().is_empty());
    }
}
