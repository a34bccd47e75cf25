use crate::catalog::record::{CategoryRecord, MaterializedPath, NewCategory, StoreRecord, StoreScope};
use crate::error::CatalogError;
use crate::types::{CategoryId, StoreId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A category as persisted: default name plus per-store name overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub store_names: BTreeMap<StoreId, String>,
    pub path: MaterializedPath,
    #[serde(default)]
    pub url_key: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_true")]
    pub is_anchor: bool,
    #[serde(default = "default_true")]
    pub include_in_menu: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl CategoryEntry {
    /// Entry for a freshly created category under `new.path`.
    pub fn from_new(new: &NewCategory, id: CategoryId, url_key: String) -> Self {
        Self {
            id,
            name: new.name.trim().to_string(),
            store_names: BTreeMap::new(),
            path: new.path.child(id),
            url_key: Some(url_key),
            is_active: new.is_active,
            is_anchor: new.is_anchor,
            include_in_menu: new.include_in_menu,
            created_at: Some(Utc::now()),
        }
    }

    pub fn parent_id(&self) -> Option<CategoryId> {
        self.path.parent()
    }

    /// Record view with the name resolved for `scope`; store-specific names
    /// fall back to the default name.
    pub fn resolve(&self, scope: Option<StoreScope>) -> CategoryRecord {
        let name = scope
            .filter(|s| *s != StoreScope::DEFAULT)
            .and_then(|s| self.store_names.get(&s.id()))
            .unwrap_or(&self.name)
            .clone();
        CategoryRecord {
            id: self.id,
            name,
            path: self.path.clone(),
            url_key: self
                .url_key
                .clone()
                .unwrap_or_else(|| crate::catalog::validation::url_key_for(&self.name)),
            is_active: self.is_active,
            is_anchor: self.is_anchor,
            include_in_menu: self.include_in_menu,
            created_at: self.created_at,
        }
    }
}

/// Id the store assigns after `last`, the highest id in use.
pub(crate) fn next_category_id(last: Option<CategoryId>) -> Result<CategoryId, CatalogError> {
    match last {
        Some(last) => last.checked_add(1).ok_or_else(|| {
            CatalogError::PersistenceError(format!("No category id left after {}", last))
        }),
        None => Ok(1),
    }
}

/// External catalog the commands read from and create into.
///
/// All reads are live: nothing here is cached between calls.
pub trait CategoryStore {
    /// Every category, names resolved for `scope`, ascending by id.
    fn list_all(&self, scope: StoreScope) -> Result<Vec<CategoryRecord>, CatalogError>;

    fn get_category(
        &self,
        id: CategoryId,
        scope: Option<StoreScope>,
    ) -> Result<CategoryRecord, CatalogError>;

    /// Direct children of `id`, ascending by id. Fails with `NotFound` when
    /// `id` itself does not exist.
    fn get_children(
        &self,
        id: CategoryId,
        scope: Option<StoreScope>,
    ) -> Result<Vec<CategoryRecord>, CatalogError>;

    /// Persist a new category and return its assigned id.
    fn create_category(&self, new: &NewCategory) -> Result<CategoryId, CatalogError>;

    fn root_category_id(&self, scope: StoreScope) -> Result<CategoryId, CatalogError>;

    /// Insert or replace a category verbatim (catalog import).
    fn put_category(&self, entry: &CategoryEntry) -> Result<(), CatalogError>;

    /// Insert or replace a store (catalog import).
    fn put_store(&self, store: &StoreRecord) -> Result<(), CatalogError>;

    /// Make every write so far durable. Stores without a backing file have
    /// nothing to do.
    fn flush(&self) -> Result<(), CatalogError> {
        Ok(())
    }
}
