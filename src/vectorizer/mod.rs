pub mod analyzer;
pub mod corpus;
pub mod stop_words;
pub mod term;
pub mod tfidf;

use std::{
    fmt::Debug,
    ops::{AddAssign, DivAssign},
};

use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        corpus::Corpus,
        term::TermFrequency,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine, Vocabulary},
    },
};

/// One document's L2-normalized TF-IDF weights.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TermVector<N>
where
    N: Float,
{
    /// sparse weights, indexed by vocabulary position
    pub weights: ZeroSpVec<N>,
    /// sum of terms of this document
    pub term_sum: u64,
}

impl<N> TermVector<N>
where
    N: Float,
{
    /// True when the document had no vocabulary terms
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.weights.nnz() == 0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IDFVector<N> {
    /// IDF Vector, dense because every vocabulary term has a weight
    pub idf_vec: Vec<N>,
    /// document count
    pub doc_num: u64,
}

/// TF-IDF Vectorizer
///
/// Fits a fixed, ordered set of documents in one pass:
/// vocabulary (sorted lexicographically), IDF weights, and one
/// L2-normalized sparse vector per document in input order.
/// There is no incremental update; refit to change the corpus.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    vocabulary: Vocabulary,
    documents: Vec<TermVector<N>>,
    idf: IDFVector<N>,
    _marker: std::marker::PhantomData<E>,
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + AddAssign + DivAssign + Send + Sync + Debug,
    E: TFIDFEngine<N>,
{
    /// Fit the vectorizer to an ordered list of documents.
    /// An empty list yields an empty vocabulary and no vectors.
    pub fn fit<S>(documents: &[S]) -> Self
    where
        S: AsRef<str> + Sync,
    {
        let freqs: Vec<TermFrequency> = documents
            .par_iter()
            .map(|doc| analyzer::term_frequency(doc.as_ref()))
            .collect();

        let mut corpus = Corpus::new();
        for freq in &freqs {
            corpus.add_doc(freq);
        }
        let vocabulary: Vocabulary = corpus.sorted_terms().into_iter().collect();

        let idf = IDFVector {
            idf_vec: E::idf_vec(&corpus, &vocabulary),
            doc_num: corpus.get_doc_num(),
        };

        let documents: Vec<TermVector<N>> = freqs
            .par_iter()
            .enumerate()
            .map(|(doc_idx, freq)| {
                let mut weights = E::tf_vec(freq, &vocabulary);
                for (term_idx, w) in weights.raw_iter_mut() {
                    *w = *w * idf.idf_vec[term_idx];
                }
                if weights.l2_normalize() == N::zero() {
                    tracing::warn!(doc = doc_idx, "document has no vocabulary terms, leaving a zero vector");
                }
                weights.shrink_to_fit();
                TermVector {
                    weights,
                    term_sum: freq.term_sum(),
                }
            })
            .collect();

        tracing::debug!(docs = documents.len(), vocab = vocabulary.len(), "fitted tf-idf vectorizer");

        Self {
            vocabulary,
            documents,
            idf,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    /// Vocabulary terms in index order
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// One vector per fitted document, in input order
    pub fn vectors(&self) -> &[TermVector<N>] {
        &self.documents
    }

    pub fn idf(&self) -> &IDFVector<N> {
        &self.idf
    }

    /// Vocabulary position of `term`
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get_index_of(term)
    }

    /// Weight of `term` in document `doc`, None if either is unknown
    pub fn weight(&self, doc: usize, term: &str) -> Option<N> {
        let idx = self.term_index(term)?;
        self.documents.get(doc)?.weights.get(idx)
    }

    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// (documents, vocabulary size)
    pub fn shape(&self) -> (usize, usize) {
        (self.documents.len(), self.vocabulary.len())
    }
}
