//! Catalog store: the port and its adapters.

pub mod contract;
pub mod embedded;
pub mod memory;

pub use contract::{CategoryEntry, CategoryStore};
pub use embedded::SledCatalog;
pub use memory::InMemoryCatalog;
