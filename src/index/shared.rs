use std::sync::{Arc, PoisonError, RwLock};

use crate::{catalog::Catalog, error::Result, index::SimilarityIndex};

/// Holder for the current index snapshot.
///
/// Readers take an `Arc` to a complete index. A rebuild runs outside the
/// lock and then swaps the pointer, so no reader sees a half-built matrix.
#[derive(Debug)]
pub struct SharedIndex {
    current: RwLock<Arc<SimilarityIndex>>,
}

impl SharedIndex {
    pub fn new(index: SimilarityIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// Build from a catalog
    pub fn build(catalog: Catalog) -> Result<Self> {
        Ok(Self::new(SimilarityIndex::build(catalog)?))
    }

    /// The current snapshot
    pub fn load(&self) -> Arc<SimilarityIndex> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Build a new index from `catalog` and swap it in.
    /// On failure the previous snapshot stays in place.
    pub fn rebuild(&self, catalog: Catalog) -> Result<Arc<SimilarityIndex>> {
        let next = Arc::new(SimilarityIndex::build(catalog)?);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, Arc::clone(&next));
        tracing::info!(
            previous = previous.len(),
            current = next.len(),
            "swapped similarity index"
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MovieRecord;

    #[test]
    fn old_snapshot_survives_rebuild() {
        let shared = SharedIndex::build(Catalog::sample()).unwrap();
        let before = shared.load();

        let small = Catalog::new(vec![
            MovieRecord::new("Alien", "Sci-Fi", "Ridley Scott", 8.5, 1979, "space horror"),
            MovieRecord::new("Aliens", "Sci-Fi", "James Cameron", 8.4, 1986, "space marines"),
        ])
        .unwrap();
        shared.rebuild(small).unwrap();

        assert_eq!(before.len(), 16);
        assert_eq!(shared.load().len(), 2);
        assert!(shared.load().recommend("Gladiator", 1).unwrap_err().is_not_found());
    }

    #[test]
    fn failed_rebuild_keeps_current() {
        let shared = SharedIndex::build(Catalog::sample()).unwrap();
        let empty = Catalog::new(Vec::new()).unwrap();
        assert!(shared.rebuild(empty).is_err());
        assert_eq!(shared.load().len(), 16);
    }
}
