//! Navigator state: the current category and the moves out of it.

use super::prompt::NavigatorPrompt;
use crate::catalog::{CategoryRecord, CategoryStore, StoreScope};
use crate::category::batch::{BatchCategoryCreator, BatchProgress, BatchReport};
use crate::error::{ApiError, CatalogError, NavigationError};
use crate::types::CategoryId;
use tracing::debug;

pub struct CategoryTreeNavigator<'a, S: CategoryStore + ?Sized> {
    store: &'a S,
    scope: StoreScope,
    current: CategoryId,
}

impl<'a, S: CategoryStore + ?Sized> CategoryTreeNavigator<'a, S> {
    /// Start at the root category of the store `scope` refers to.
    pub fn new(store: &'a S, scope: StoreScope) -> Result<Self, CatalogError> {
        let root = store.root_category_id(scope)?;
        store.get_category(root, Some(scope))?;
        Ok(Self::at(store, scope, root))
    }

    /// Start at an arbitrary category.
    pub fn at(store: &'a S, scope: StoreScope, current: CategoryId) -> Self {
        Self {
            store,
            scope,
            current,
        }
    }

    pub fn current_id(&self) -> CategoryId {
        self.current
    }

    pub fn scope(&self) -> StoreScope {
        self.scope
    }

    pub fn current(&self) -> Result<CategoryRecord, CatalogError> {
        self.store.get_category(self.current, Some(self.scope))
    }

    pub fn children(&self) -> Result<Vec<CategoryRecord>, CatalogError> {
        self.store.get_children(self.current, Some(self.scope))
    }

    /// Move to the parent of the current category. At a category without a
    /// parent the position is kept and `NoParent` returned.
    pub fn ascend(&mut self) -> Result<CategoryId, NavigationError> {
        let current = self.current()?;
        let parent = current
            .parent_id()
            .ok_or(NavigationError::NoParent(self.current))?;
        debug!(from = self.current, to = parent, "Ascending");
        self.current = parent;
        Ok(parent)
    }

    /// Ask `prompt` to pick one of the current category's children and move
    /// there. A leaf keeps the position and yields `NoSubCategories`.
    pub fn descend<P: NavigatorPrompt + ?Sized>(
        &mut self,
        prompt: &mut P,
    ) -> Result<CategoryId, ApiError> {
        let children = self.children().map_err(NavigationError::from)?;
        if children.is_empty() {
            return Err(NavigationError::NoSubCategories(self.current).into());
        }
        let choice = prompt.choose_category(&children)?;
        let child = children.get(choice).ok_or_else(|| {
            ApiError::InputError(format!("No sub-category at position {}", choice))
        })?;
        debug!(from = self.current, to = child.id, "Descending");
        self.current = child.id;
        Ok(child.id)
    }

    /// Create the names in `raw` as children of the current category.
    pub fn create_children<F>(
        &self,
        batch: &BatchCategoryCreator<'_, S>,
        raw: &str,
        on_progress: F,
    ) -> BatchReport
    where
        F: FnMut(&BatchProgress<'_>),
    {
        batch.create_all(raw, self.current, on_progress)
    }
}
