use std::fmt::{self, Debug, Display};

use serde::Serialize;

/// A single ranked result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitEntry<K> {
    pub key: K,
    pub score: f64,
}

/// Structure to store ranked results
#[derive(Clone, PartialEq, Serialize)]
pub struct Hits<K> {
    pub list: Vec<HitEntry<K>>,
}

impl<K> Hits<K> {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry<K>>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score, ties by ascending key
    pub fn sort_by_score_desc(&mut self) -> &mut Self
    where
        K: Ord,
    {
        // Remove NaN scores
        self.list.retain(|e| !e.score.is_nan());
        self.list
            .sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.key.cmp(&b.key)));
        self
    }

    pub fn truncate(&mut self, len: usize) -> &mut Self {
        self.list.truncate(len);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry<K>> {
        self.list.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.list.iter().map(|e| &e.key)
    }
}

impl<K> IntoIterator for Hits<K> {
    type Item = HitEntry<K>;
    type IntoIter = std::vec::IntoIter<HitEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // each hit on a new line
            writeln!(f, "Hits [")?;
            for e in &self.list {
                writeln!(f, "    {:?}: {:.6}", e.key, e.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|e| (&e.key, e.score)))
                .finish()
        }
    }
}

impl<K> Display for Hits<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, e) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. {} ({:.4})", rank + 1, e.key, e.score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(key: usize, score: f64) -> HitEntry<usize> {
        HitEntry { key, score }
    }

    #[test]
    fn sorts_descending_with_ascending_key_ties() {
        let mut hits = Hits::new(vec![hit(3, 0.2), hit(1, 0.5), hit(0, 0.2), hit(2, f64::NAN), hit(4, 0.9)]);
        hits.sort_by_score_desc();
        assert_eq!(hits.keys().copied().collect::<Vec<_>>(), vec![4, 1, 0, 3]);
    }

    #[test]
    fn display_lists_ranks() {
        let hits = Hits::new(vec![hit(7, 0.5)]);
        assert_eq!(hits.to_string(), "  1. 7 (0.5000)\n");
    }
}
