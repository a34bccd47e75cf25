//! Core identifier types for the category catalog.

/// CategoryId: identifier assigned to a category by the catalog store
pub type CategoryId = u64;

/// StoreId: identifier of a store scope (sales channel / locale)
pub type StoreId = u32;
