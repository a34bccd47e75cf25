//! Category validation shared by every store adapter.

use crate::catalog::record::{CategoryRecord, NewCategory};
use crate::error::CatalogError;

/// Derive the URL key for a category name: lower-case alphanumerics, every
/// other run of characters collapsed to a single `-`.
pub fn url_key_for(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_dash && !key.is_empty() {
                key.push('-');
            }
            pending_dash = false;
            key.push(c);
        } else {
            pending_dash = true;
        }
    }
    key
}

/// Check a new category against its parent and the parent's current
/// children. Returns the URL key the category will be stored under.
pub fn validate_new_category(
    new: &NewCategory,
    parent: &CategoryRecord,
    siblings: &[CategoryRecord],
) -> Result<String, CatalogError> {
    if new.name.trim().is_empty() {
        return Err(CatalogError::ValidationError(
            "Category name cannot be empty".to_string(),
        ));
    }

    if new.path != parent.path {
        return Err(CatalogError::ValidationError(format!(
            "Path {} does not match parent {} path {}",
            new.path, parent.id, parent.path
        )));
    }

    let url_key = url_key_for(&new.name);
    if url_key.is_empty() {
        return Err(CatalogError::ValidationError(format!(
            "Cannot derive a URL key from '{}'",
            new.name
        )));
    }

    if let Some(existing) = siblings.iter().find(|s| s.url_key == url_key) {
        return Err(CatalogError::ValidationError(format!(
            "URL key '{}' is already used by category {} under parent {}",
            url_key, existing.id, parent.id
        )));
    }

    Ok(url_key)
}
