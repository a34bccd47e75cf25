//! Category and store records.

use crate::error::CatalogError;
use crate::types::{CategoryId, StoreId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between ids in the textual form of a materialized path.
pub const ID_PATH_SEPARATOR: char = '/';

/// Ordered ancestor ids from the tree root down to the node itself.
///
/// Textual form is `1/2/3`, which is also the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MaterializedPath(Vec<CategoryId>);

impl MaterializedPath {
    pub fn new(ids: Vec<CategoryId>) -> Self {
        Self(ids)
    }

    pub fn ids(&self) -> &[CategoryId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last id in the path, the node the path belongs to.
    pub fn leaf(&self) -> Option<CategoryId> {
        self.0.last().copied()
    }

    /// Second-to-last id, absent for the root.
    pub fn parent(&self) -> Option<CategoryId> {
        if self.0.len() < 2 {
            return None;
        }
        self.0.get(self.0.len() - 2).copied()
    }

    /// New path with `id` appended.
    pub fn child(&self, id: CategoryId) -> Self {
        let mut ids = self.0.clone();
        ids.push(id);
        Self(ids)
    }
}

impl FromStr for MaterializedPath {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        trimmed
            .split(ID_PATH_SEPARATOR)
            .map(|segment| {
                segment
                    .trim()
                    .parse::<CategoryId>()
                    .map_err(|_| CatalogError::InvalidPath(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for MaterializedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for id in &self.0 {
            if !first {
                write!(f, "{}", ID_PATH_SEPARATOR)?;
            }
            write!(f, "{}", id)?;
            first = false;
        }
        Ok(())
    }
}

impl TryFrom<String> for MaterializedPath {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MaterializedPath> for String {
    fn from(path: MaterializedPath) -> Self {
        path.to_string()
    }
}

impl From<Vec<CategoryId>> for MaterializedPath {
    fn from(ids: Vec<CategoryId>) -> Self {
        Self(ids)
    }
}

/// One category node as known to the catalog, with its name resolved for
/// the scope it was read in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub path: MaterializedPath,
    #[serde(default)]
    pub url_key: String,
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

impl CategoryRecord {
    pub fn parent_id(&self) -> Option<CategoryId> {
        self.path.parent()
    }

    pub fn is_root(&self) -> bool {
        self.path.len() <= 1
    }
}

/// Attributes of a category about to be created.
///
/// `path` is the parent's path; the store appends the assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub parent_id: CategoryId,
    pub path: MaterializedPath,
    pub is_active: bool,
    pub is_anchor: bool,
    pub include_in_menu: bool,
}

/// Which store's attribute values a read should resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreScope(pub StoreId);

impl StoreScope {
    /// Admin scope, the catalog's default attribute values.
    pub const DEFAULT: StoreScope = StoreScope(0);

    pub fn id(&self) -> StoreId {
        self.0
    }
}

impl Default for StoreScope {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for StoreScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A store and the root of its category tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub store_id: StoreId,
    pub code: String,
    pub root_category_id: CategoryId,
}
