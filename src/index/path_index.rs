//! PathIndex: normalized category path -> id, and id -> record.

use super::codec::{
    quote_delimiter, split_path, standardize, trim_delimiters, DELIMITER,
};
use crate::catalog::record::CategoryRecord;
use crate::types::CategoryId;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Two records whose paths normalized to the same key. The later record
/// wins the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCollision {
    pub path: String,
    pub replaced: CategoryId,
    pub winner: CategoryId,
}

/// Process-local index over a snapshot of the catalog.
///
/// Categories created after the snapshot was taken are not added; callers
/// that need fresh data go to the store.
#[derive(Debug, Default)]
pub struct PathIndex {
    by_id: HashMap<CategoryId, CategoryRecord>,
    by_normalized_path: HashMap<String, CategoryId>,
    collisions: Vec<PathCollision>,
    unresolved: Vec<CategoryId>,
}

impl PathIndex {
    /// Build the index from a flat collection of records in one pass.
    ///
    /// The first path element is the synthetic global root and never
    /// contributes a name. Records with an ancestor missing from the
    /// collection are indexed by id only.
    pub fn build(records: impl IntoIterator<Item = CategoryRecord>) -> Self {
        let records: Vec<CategoryRecord> = records.into_iter().collect();
        let names: HashMap<CategoryId, &str> =
            records.iter().map(|r| (r.id, r.name.as_str())).collect();

        let mut by_normalized_path = HashMap::new();
        let mut collisions = Vec::new();
        let mut unresolved = Vec::new();

        for record in &records {
            let ancestors = record.path.ids();
            if ancestors.len() <= 1 {
                continue;
            }

            let quoted: Option<Vec<String>> = ancestors[1..]
                .iter()
                .map(|id| names.get(id).map(|name| quote_delimiter(name)))
                .collect();
            let Some(quoted) = quoted else {
                warn!(
                    category_id = record.id,
                    path = %record.path,
                    "Category has an ancestor outside the catalog, skipping path key"
                );
                unresolved.push(record.id);
                continue;
            };

            let key = standardize(&quoted.join(&DELIMITER.to_string()));
            if let Some(replaced) = by_normalized_path.insert(key.clone(), record.id) {
                warn!(
                    path = %key,
                    replaced,
                    winner = record.id,
                    "Duplicate category path, keeping the later category"
                );
                collisions.push(PathCollision {
                    path: key,
                    replaced,
                    winner: record.id,
                });
            }
        }

        let by_id: HashMap<CategoryId, CategoryRecord> =
            records.into_iter().map(|r| (r.id, r)).collect();

        debug!(
            categories = by_id.len(),
            paths = by_normalized_path.len(),
            collisions = collisions.len(),
            "Path index built"
        );

        Self {
            by_id,
            by_normalized_path,
            collisions,
            unresolved,
        }
    }

    /// Id for a slash path. The query is normalized like the keys, so
    /// lookups are case-insensitive. Unescaped delimiters at either end are
    /// ignored.
    pub fn lookup_by_path(&self, path: &str) -> Option<CategoryId> {
        self.by_normalized_path
            .get(&standardize(trim_delimiters(path)))
            .copied()
    }

    pub fn lookup_by_id(&self, id: CategoryId) -> Option<&CategoryRecord> {
        self.by_id.get(&id)
    }

    /// Ancestor names for an indexed path key, delimiters unescaped.
    pub fn denormalize(path: &str) -> Vec<String> {
        split_path(path)
    }

    /// All `(normalized path, id)` pairs sorted by path.
    pub fn paths(&self) -> Vec<(&str, CategoryId)> {
        let mut paths: Vec<(&str, CategoryId)> = self
            .by_normalized_path
            .iter()
            .map(|(path, id)| (path.as_str(), *id))
            .collect();
        paths.sort_unstable();
        paths
    }

    pub fn collisions(&self) -> &[PathCollision] {
        &self.collisions
    }

    /// Records indexed by id only because an ancestor was missing.
    pub fn unresolved(&self) -> &[CategoryId] {
        &self.unresolved
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn path_count(&self) -> usize {
        self.by_normalized_path.len()
    }
}
