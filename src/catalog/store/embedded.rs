//! Embedded catalog adapter backed by sled.
//!
//! Two trees: `categories` keyed by big-endian category id and `stores`
//! keyed by big-endian store id. Values are bincode-encoded.

use super::contract::{next_category_id, CategoryEntry, CategoryStore};
use crate::catalog::record::{CategoryRecord, NewCategory, StoreRecord, StoreScope};
use crate::catalog::validation::validate_new_category;
use crate::error::{CatalogError, StorageError};
use crate::types::{CategoryId, StoreId};
use std::path::Path;
use tracing::debug;

const CATEGORIES_TREE: &str = "categories";
const STORES_TREE: &str = "stores";

pub struct SledCatalog {
    db: sled::Db,
    categories: sled::Tree,
    stores: sled::Tree,
}

impl SledCatalog {
    /// Open (or create) the catalog database at `path`.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = sled::open(path).map_err(|e| StorageError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_db(db).map_err(|e| StorageError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_db(db: sled::Db) -> Result<Self, CatalogError> {
        let categories = db.open_tree(CATEGORIES_TREE)?;
        let stores = db.open_tree(STORES_TREE)?;
        Ok(Self {
            db,
            categories,
            stores,
        })
    }

    fn entries(&self) -> Result<Vec<CategoryEntry>, CatalogError> {
        self.categories
            .iter()
            .values()
            .map(|value| Ok(bincode::deserialize::<CategoryEntry>(&value?)?))
            .collect()
    }

    fn entry(&self, id: CategoryId) -> Result<Option<CategoryEntry>, CatalogError> {
        match self.categories.get(id.to_be_bytes())? {
            Some(value) => Ok(Some(bincode::deserialize(&value)?)),
            None => Ok(None),
        }
    }

    fn next_id(&self) -> Result<CategoryId, CatalogError> {
        let last = match self.categories.last()? {
            Some((key, _)) => {
                let bytes: [u8; 8] = key.as_ref().try_into().map_err(|_| {
                    CatalogError::PersistenceError(format!(
                        "Malformed category key of {} bytes",
                        key.len()
                    ))
                })?;
                Some(CategoryId::from_be_bytes(bytes))
            }
            None => None,
        };
        next_category_id(last)
    }

    fn write_entry(&self, entry: &CategoryEntry) -> Result<(), CatalogError> {
        let value = bincode::serialize(entry)?;
        self.categories.insert(entry.id.to_be_bytes(), value)?;
        Ok(())
    }

    fn store(&self, store_id: StoreId) -> Result<Option<StoreRecord>, CatalogError> {
        match self.stores.get(store_id.to_be_bytes())? {
            Some(value) => Ok(Some(bincode::deserialize(&value)?)),
            None => Ok(None),
        }
    }
}

impl CategoryStore for SledCatalog {
    fn list_all(&self, scope: StoreScope) -> Result<Vec<CategoryRecord>, CatalogError> {
        Ok(self
            .entries()?
            .iter()
            .map(|e| e.resolve(Some(scope)))
            .collect())
    }

    fn get_category(
        &self,
        id: CategoryId,
        scope: Option<StoreScope>,
    ) -> Result<CategoryRecord, CatalogError> {
        self.entry(id)?
            .map(|e| e.resolve(scope))
            .ok_or(CatalogError::NotFound(id))
    }

    fn get_children(
        &self,
        id: CategoryId,
        scope: Option<StoreScope>,
    ) -> Result<Vec<CategoryRecord>, CatalogError> {
        if !self.categories.contains_key(id.to_be_bytes())? {
            return Err(CatalogError::NotFound(id));
        }
        Ok(self
            .entries()?
            .iter()
            .filter(|e| e.parent_id() == Some(id))
            .map(|e| e.resolve(scope))
            .collect())
    }

    fn create_category(&self, new: &NewCategory) -> Result<CategoryId, CatalogError> {
        let parent = self.get_category(new.parent_id, None)?;
        let siblings = self.get_children(new.parent_id, None)?;
        let url_key = validate_new_category(new, &parent, &siblings)?;

        let id = self.next_id()?;
        let entry = CategoryEntry::from_new(new, id, url_key);
        self.write_entry(&entry)?;
        self.flush()?;
        debug!(category_id = id, path = %entry.path, "Category persisted");
        Ok(id)
    }

    fn root_category_id(&self, scope: StoreScope) -> Result<CategoryId, CatalogError> {
        self.store(scope.id())?
            .map(|s| s.root_category_id)
            .ok_or(CatalogError::UnknownStore(scope.id()))
    }

    fn put_category(&self, entry: &CategoryEntry) -> Result<(), CatalogError> {
        self.write_entry(entry)
    }

    fn put_store(&self, store: &StoreRecord) -> Result<(), CatalogError> {
        let value = bincode::serialize(store)?;
        self.stores.insert(store.store_id.to_be_bytes(), value)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), CatalogError> {
        self.db.flush()?;
        Ok(())
    }
}
