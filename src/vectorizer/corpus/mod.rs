use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::term::TermFrequency;

/// Keeps the document count and the number of documents each term appears in.
/// Base data for IDF calculation; holds no document text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    doc_num: u64,
    /// document frequency per term
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Add a document's distinct terms to the corpus
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            self.term_counts
                .entry(term.as_ref().into())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
    }

    /// Add a document from its term counts
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.add_set(&freq.term_set_ref_str());
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of documents containing `term`
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// All terms, sorted lexicographically
    pub fn sorted_terms(&self) -> Vec<Box<str>> {
        let mut terms: Vec<Box<str>> = self.term_counts.keys().cloned().collect();
        terms.sort_unstable();
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_documents_not_occurrences() {
        let mut corpus = Corpus::new();
        let mut a = TermFrequency::new();
        a.add_terms(&["crime", "crime", "mafia"]);
        let mut b = TermFrequency::new();
        b.add_terms(&["crime", "thriller"]);
        corpus.add_doc(&a);
        corpus.add_doc(&b);

        assert_eq!(corpus.get_doc_num(), 2);
        assert_eq!(corpus.get_term_count("crime"), 2);
        assert_eq!(corpus.get_term_count("mafia"), 1);
        assert_eq!(corpus.get_term_count("space"), 0);
        assert_eq!(corpus.vocab_size(), 3);
    }

    #[test]
    fn sorted_terms_are_lexicographic() {
        let mut corpus = Corpus::new();
        corpus.add_set(&["zeta", "alpha", "mid"]);
        let terms = corpus.sorted_terms();
        let terms: Vec<&str> = terms.iter().map(|t| &**t).collect();
        assert_eq!(terms, vec!["alpha", "mid", "zeta"]);
    }
}
