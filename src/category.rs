//! Category Creation
//!
//! Single and batch creation of categories through the catalog store. A
//! failed creation is an outcome, not an error: batches keep going and
//! earlier successes are never rolled back.

pub mod batch;
pub mod commands;
pub mod creator;

pub use batch::{split_names, BatchCategoryCreator, BatchProgress, BatchReport};
pub use commands::{CategoryCommandService, CategoryListResult, CategoryLookupResult};
pub use creator::{CategoryCreator, CreationOutcome};
