//! Feature text: the single string per movie that gets vectorized.

use crate::catalog::{Catalog, MovieRecord};

/// `genre + " " + director + " " + tags`
#[inline]
pub fn feature_text(record: &MovieRecord) -> String {
    format!("{} {} {}", record.genre, record.director, record.tags)
}

/// One feature text per record, in catalog order
pub fn synthesize(catalog: &Catalog) -> Vec<String> {
    catalog.iter().map(feature_text).collect()
}
