//! Category command service: one entry point per non-interactive CLI command.
//!
//! CLI parses, calls one method per variant, and formats the returned result.

use super::creator::{CategoryCreator, CreationOutcome};
use crate::catalog::{CatalogDocument, CategoryStore, ImportSummary};
use crate::config::{CategoryDefaults, QuickCreateConfig};
use crate::error::ApiError;
use crate::index::PathIndex;
use crate::types::CategoryId;
use serde::Serialize;
use std::path::Path;

pub struct CategoryCommandService;

/// Result of the list command.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListResult {
    pub categories: Vec<CategoryListItem>,
    pub collisions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListItem {
    pub path: String,
    pub category_id: CategoryId,
    pub name: String,
}

/// Result of the lookup command.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryLookupResult {
    pub path: String,
    pub category_id: Option<CategoryId>,
    pub name: Option<String>,
}

impl CategoryCommandService {
    /// Create one category. Never fails: a store failure is in the outcome.
    pub fn create<S: CategoryStore + ?Sized>(
        store: &S,
        index: &PathIndex,
        config: &QuickCreateConfig,
        name: &str,
        parent_id: Option<CategoryId>,
        attributes: CategoryDefaults,
    ) -> CreationOutcome {
        let creator = CategoryCreator::new(
            store,
            index,
            config.defaults,
            config.catalog.default_parent_id,
        );
        creator.create_with(name, parent_id, attributes)
    }

    /// Every indexed path, sorted.
    pub fn list(index: &PathIndex) -> CategoryListResult {
        let categories = index
            .paths()
            .into_iter()
            .map(|(path, id)| CategoryListItem {
                path: path.to_string(),
                category_id: id,
                name: index
                    .lookup_by_id(id)
                    .map(|r| r.name.clone())
                    .unwrap_or_default(),
            })
            .collect();
        CategoryListResult {
            categories,
            collisions: index.collisions().len(),
        }
    }

    /// Resolve a slash path through the index.
    pub fn lookup(index: &PathIndex, path: &str) -> CategoryLookupResult {
        let category_id = index.lookup_by_path(path);
        CategoryLookupResult {
            path: path.to_string(),
            category_id,
            name: category_id
                .and_then(|id| index.lookup_by_id(id))
                .map(|r| r.name.clone()),
        }
    }

    /// Seed the catalog from a JSON document.
    pub fn import<S: CategoryStore + ?Sized>(
        store: &S,
        file: &Path,
    ) -> Result<ImportSummary, ApiError> {
        let document = CatalogDocument::from_file(file)?;
        Ok(document.import_into(store)?)
    }
}
