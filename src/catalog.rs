//! Category Catalog
//!
//! The category records this tool reads and creates, and the store port the
//! rest of the crate talks to. Two adapters implement the port: an embedded
//! sled database and an in-memory map.

pub mod import;
pub mod record;
pub mod store;
pub mod validation;

pub use import::{CatalogDocument, ImportSummary};
pub use record::{CategoryRecord, MaterializedPath, NewCategory, StoreRecord, StoreScope};
pub use store::{CategoryStore, InMemoryCatalog, SledCatalog};
pub use validation::{url_key_for, validate_new_category};
