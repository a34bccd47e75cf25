//! Error types
//!
//! One enum per layer. Catalog failures are recoverable per item; `ApiError`
//! is what the CLI surfaces as a non-zero exit.

use crate::types::{CategoryId, StoreId};
use thiserror::Error;

/// Failures raised by a catalog store.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No category with the given id exists
    #[error("Category not found: {0}")]
    NotFound(CategoryId),

    /// The store rejected the category (empty name, duplicate URL key, ...)
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// The store could not persist or read records
    #[error("Persistence failed: {0}")]
    PersistenceError(String),

    /// No store is registered under the given id
    #[error("Unknown store: {0}")]
    UnknownStore(StoreId),

    /// A materialized path could not be parsed
    #[error("Invalid category path '{0}'")]
    InvalidPath(String),
}

impl From<sled::Error> for CatalogError {
    fn from(err: sled::Error) -> Self {
        CatalogError::PersistenceError(err.to_string())
    }
}

impl From<bincode::Error> for CatalogError {
    fn from(err: bincode::Error) -> Self {
        CatalogError::PersistenceError(format!("Failed to decode record: {}", err))
    }
}

/// Failures of a single tree navigation step.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("No parent category found for {0}.")]
    NoParent(CategoryId),

    #[error("Category {0} has no sub-categories.")]
    NoSubCategories(CategoryId),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Storage setup errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to open catalog database {path}: {message}")]
    OpenFailed { path: String, message: String },
}

/// Top-level error returned by CLI commands
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error("Failed to get user input: {0}")]
    InputError(String),

    #[error("Import failed: {0}")]
    ImportError(String),

    #[error("Failed to render output: {0}")]
    OutputError(String),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<dialoguer::Error> for ApiError {
    fn from(err: dialoguer::Error) -> Self {
        ApiError::InputError(err.to_string())
    }
}
