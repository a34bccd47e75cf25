//! Configuration
//!
//! Layered configuration: built-in defaults, the global config file, an
//! optional explicit file, then `QUICKCREATE__*` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::types::{CategoryId, StoreId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parent used by `create-category` when `--parent-id` is not given.
pub const DEFAULT_PARENT_ID: CategoryId = 64;

/// Store whose root the tree navigator starts at.
pub const DEFAULT_STORE_ID: StoreId = 1;

/// Separator between names in batch input.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuickCreateConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub defaults: CategoryDefaults,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Catalog location and scope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog database path; None means `$XDG_DATA_HOME/quickcreate/catalog`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    #[serde(default = "default_store_id")]
    pub store_id: StoreId,

    #[serde(default = "default_parent_id")]
    pub default_parent_id: CategoryId,

    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_store_id() -> StoreId {
    DEFAULT_STORE_ID
}

fn default_parent_id() -> CategoryId {
    DEFAULT_PARENT_ID
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            store_id: default_store_id(),
            default_parent_id: default_parent_id(),
            separator: default_separator(),
        }
    }
}

impl CatalogConfig {
    /// Resolve the catalog database path.
    pub fn resolve_db_path(&self) -> Result<PathBuf, ApiError> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => paths::xdg_root::default_catalog_path(),
        }
    }
}

/// Attribute values applied to created categories unless overridden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefaults {
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_true")]
    pub is_anchor: bool,
    #[serde(default = "default_true")]
    pub include_in_menu: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CategoryDefaults {
    fn default() -> Self {
        Self {
            is_active: true,
            is_anchor: true,
            include_in_menu: true,
        }
    }
}

impl QuickCreateConfig {
    /// Check values the type system cannot.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.catalog.separator.is_empty() {
            return Err(ApiError::ConfigError(
                "catalog.separator cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
