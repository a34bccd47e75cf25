//! CategoryCreator: create one category under a parent.

use crate::catalog::{CategoryRecord, CategoryStore, NewCategory};
use crate::config::CategoryDefaults;
use crate::error::CatalogError;
use crate::index::PathIndex;
use crate::types::CategoryId;
use tracing::{info, warn};

/// Result of one creation attempt.
#[derive(Debug)]
pub struct CreationOutcome {
    pub name: String,
    pub parent_id: CategoryId,
    pub result: Result<CategoryId, CatalogError>,
}

impl CreationOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.result.as_ref().ok().copied()
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.result.as_ref().err()
    }
}

pub struct CategoryCreator<'a, S: CategoryStore + ?Sized> {
    store: &'a S,
    index: &'a PathIndex,
    defaults: CategoryDefaults,
    fallback_parent_id: CategoryId,
}

impl<'a, S: CategoryStore + ?Sized> CategoryCreator<'a, S> {
    pub fn new(
        store: &'a S,
        index: &'a PathIndex,
        defaults: CategoryDefaults,
        fallback_parent_id: CategoryId,
    ) -> Self {
        Self {
            store,
            index,
            defaults,
            fallback_parent_id,
        }
    }

    pub fn store(&self) -> &'a S {
        self.store
    }

    /// Create `name` under `parent_id` (or the fallback parent) with the
    /// configured default attributes.
    pub fn create(&self, name: &str, parent_id: Option<CategoryId>) -> CreationOutcome {
        self.create_with(name, parent_id, self.defaults)
    }

    /// Create `name` with explicit attribute values.
    pub fn create_with(
        &self,
        name: &str,
        parent_id: Option<CategoryId>,
        attributes: CategoryDefaults,
    ) -> CreationOutcome {
        let parent_id = parent_id.unwrap_or(self.fallback_parent_id);
        let result = self
            .resolve_parent(parent_id)
            .and_then(|parent| {
                self.store.create_category(&NewCategory {
                    name: name.to_string(),
                    parent_id,
                    path: parent.path,
                    is_active: attributes.is_active,
                    is_anchor: attributes.is_anchor,
                    include_in_menu: attributes.include_in_menu,
                })
            });

        match &result {
            Ok(id) => info!(category_id = id, parent_id, category_name = name, "Category created"),
            Err(e) => warn!(parent_id, category_name = name, error = %e, "Category creation failed"),
        }

        CreationOutcome {
            name: name.to_string(),
            parent_id,
            result,
        }
    }

    /// Parent from the index snapshot, else live from the store.
    fn resolve_parent(&self, parent_id: CategoryId) -> Result<CategoryRecord, CatalogError> {
        match self.index.lookup_by_id(parent_id) {
            Some(parent) => Ok(parent.clone()),
            None => self.store.get_category(parent_id, None),
        }
    }
}
