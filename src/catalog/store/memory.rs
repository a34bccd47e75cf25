//! In-memory catalog adapter.

use super::contract::{next_category_id, CategoryEntry, CategoryStore};
use crate::catalog::record::{CategoryRecord, NewCategory, StoreRecord, StoreScope};
use crate::catalog::validation::validate_new_category;
use crate::error::CatalogError;
use crate::types::{CategoryId, StoreId};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Catalog held in ordered maps; ids are assigned as max + 1.
#[derive(Default)]
pub struct InMemoryCatalog {
    categories: RwLock<BTreeMap<CategoryId, CategoryEntry>>,
    stores: RwLock<BTreeMap<StoreId, StoreRecord>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries and stores in one call.
    pub fn with_entries(
        entries: impl IntoIterator<Item = CategoryEntry>,
        stores: impl IntoIterator<Item = StoreRecord>,
    ) -> Self {
        let catalog = Self::new();
        {
            let mut categories = catalog.categories.write();
            for entry in entries {
                categories.insert(entry.id, entry);
            }
            let mut by_store = catalog.stores.write();
            for store in stores {
                by_store.insert(store.store_id, store);
            }
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.categories.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.read().is_empty()
    }
}

impl CategoryStore for InMemoryCatalog {
    fn list_all(&self, scope: StoreScope) -> Result<Vec<CategoryRecord>, CatalogError> {
        Ok(self
            .categories
            .read()
            .values()
            .map(|e| e.resolve(Some(scope)))
            .collect())
    }

    fn get_category(
        &self,
        id: CategoryId,
        scope: Option<StoreScope>,
    ) -> Result<CategoryRecord, CatalogError> {
        self.categories
            .read()
            .get(&id)
            .map(|e| e.resolve(scope))
            .ok_or(CatalogError::NotFound(id))
    }

    fn get_children(
        &self,
        id: CategoryId,
        scope: Option<StoreScope>,
    ) -> Result<Vec<CategoryRecord>, CatalogError> {
        let categories = self.categories.read();
        if !categories.contains_key(&id) {
            return Err(CatalogError::NotFound(id));
        }
        Ok(categories
            .values()
            .filter(|e| e.parent_id() == Some(id))
            .map(|e| e.resolve(scope))
            .collect())
    }

    fn create_category(&self, new: &NewCategory) -> Result<CategoryId, CatalogError> {
        let parent = self.get_category(new.parent_id, None)?;
        let siblings = self.get_children(new.parent_id, None)?;
        let url_key = validate_new_category(new, &parent, &siblings)?;

        let mut categories = self.categories.write();
        let id = next_category_id(categories.keys().next_back().copied())?;
        categories.insert(id, CategoryEntry::from_new(new, id, url_key));
        Ok(id)
    }

    fn root_category_id(&self, scope: StoreScope) -> Result<CategoryId, CatalogError> {
        self.stores
            .read()
            .get(&scope.id())
            .map(|s| s.root_category_id)
            .ok_or(CatalogError::UnknownStore(scope.id()))
    }

    fn put_category(&self, entry: &CategoryEntry) -> Result<(), CatalogError> {
        self.categories.write().insert(entry.id, entry.clone());
        Ok(())
    }

    fn put_store(&self, store: &StoreRecord) -> Result<(), CatalogError> {
        self.stores.write().insert(store.store_id, store.clone());
        Ok(())
    }
}
