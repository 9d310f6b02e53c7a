use indexmap::IndexSet;
use num::Float;

use crate::{utils::math::vector::ZeroSpVec, vectorizer::{corpus::Corpus, term::TermFrequency}};

pub type Vocabulary = IndexSet<Box<str>>;

pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// Build the IDF vector
    /// # Arguments
    /// * `corpus` - corpus
    /// * `vocabulary` - term dimensions, in index order
    /// # Returns
    /// * `Vec<N>` - one IDF weight per vocabulary entry
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> Vec<N>;

    /// Build the sparse TF vector of one document.
    /// Terms outside `vocabulary` are ignored.
    fn tf_vec(freq: &TermFrequency, vocabulary: &Vocabulary) -> ZeroSpVec<N>;
}

/// Default TF-IDF engine
///
/// - `tf(t, d)` = raw count of `t` in `d`
/// - `idf(t)` = `ln((1 + N) / (1 + df(t))) + 1`
///
/// The smoothed IDF stays positive for terms present in every document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

#[inline]
fn cast<N: Float>(v: f64) -> N {
    N::from(v).unwrap_or_else(N::zero)
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> Vec<N> {
        let doc_num = corpus.get_doc_num();
        vocabulary
            .iter()
            .map(|term| cast(Self::idf_calc(doc_num, corpus.get_term_count(term))))
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, vocabulary: &Vocabulary) -> ZeroSpVec<N> {
        let mut entries: Vec<(usize, u64)> = freq
            .iter()
            .filter_map(|(term, count)| vocabulary.get_index_of(term).map(|idx| (idx, count)))
            .collect();
        entries.sort_unstable_by_key(|&(idx, _)| idx);

        let mut tf_vec = ZeroSpVec::with_capacity(entries.len());
        for (idx, count) in entries {
            tf_vec.raw_push(idx, cast(count as f64));
        }
        tf_vec.add_dim(vocabulary.len() - tf_vec.len());
        tf_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> Vocabulary {
        terms.iter().map(|t| Box::<str>::from(*t)).collect()
    }

    #[test]
    fn idf_is_one_for_term_in_every_document() {
        assert_eq!(DefaultTFIDFEngine::idf_calc(4, 4), 1.0);
        assert!((DefaultTFIDFEngine::idf_calc(3, 1) - (2.0f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let mut corpus = Corpus::new();
        corpus.add_set(&["action", "dark"]);
        corpus.add_set(&["action", "epic"]);
        let v = vocab(&["action", "dark", "epic"]);
        let idf: Vec<f64> = <DefaultTFIDFEngine as TFIDFEngine<f64>>::idf_vec(&corpus, &v);
        assert_eq!(idf.len(), 3);
        assert!(idf[1] > idf[0]);
        assert_eq!(idf[1], idf[2]);
    }

    #[test]
    fn tf_vec_uses_raw_counts_in_vocabulary_order() {
        let v = vocab(&["action", "dark", "epic"]);
        let mut freq = TermFrequency::new();
        freq.add_terms(&["epic", "action", "epic", "unknown"]);
        let tf: ZeroSpVec<f32> = <DefaultTFIDFEngine as TFIDFEngine<f32>>::tf_vec(&freq, &v);
        assert_eq!(tf.len(), 3);
        assert_eq!(tf.raw_iter().map(|(i, x)| (i, *x)).collect::<Vec<_>>(), vec![(0, 1.0), (2, 2.0)]);
    }
}
