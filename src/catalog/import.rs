//! Catalog import from a JSON document.
//!
//! ```json
//! {
//!   "stores": [{ "store_id": 1, "code": "default", "root_category_id": 2 }],
//!   "categories": [
//!     { "id": 1, "name": "Root Catalog", "path": "1" },
//!     { "id": 2, "name": "Default Category", "path": "1/2" }
//!   ]
//! }
//! ```

use crate::catalog::record::StoreRecord;
use crate::catalog::store::{CategoryEntry, CategoryStore};
use crate::error::{ApiError, CatalogError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub stores: Vec<StoreRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub stores: usize,
    pub categories: usize,
}

impl CatalogDocument {
    pub fn from_file(path: &Path) -> Result<Self, ApiError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::ImportError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            ApiError::ImportError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Reject entries whose path does not end with their own id.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for entry in &self.categories {
            if entry.path.leaf() != Some(entry.id) {
                return Err(CatalogError::InvalidPath(format!(
                    "category {} has path {}",
                    entry.id, entry.path
                )));
            }
        }
        Ok(())
    }

    /// Write every store and category into `store`, replacing existing ids.
    pub fn import_into<S>(&self, store: &S) -> Result<ImportSummary, CatalogError>
    where
        S: CategoryStore + ?Sized,
    {
        self.validate()?;
        for record in &self.stores {
            store.put_store(record)?;
        }
        for entry in &self.categories {
            store.put_category(entry)?;
        }
        store.flush()?;
        info!(
            stores = self.stores.len(),
            categories = self.categories.len(),
            "Catalog imported"
        );
        Ok(ImportSummary {
            stores: self.stores.len(),
            categories: self.categories.len(),
        })
    }
}
