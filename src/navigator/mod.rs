//! Category Tree Navigator
//!
//! Interactive walk over the category tree: move into a child, move up to
//! the parent, bulk-create children at the current position. Every move reads
//! the store live; the path index snapshot is only used to resolve parents
//! during creation.

pub mod prompt;
pub mod session;
pub mod state;

pub use prompt::{DialoguerPrompt, NavigatorAction, NavigatorPrompt, ScriptStep, ScriptedPrompt};
pub use session::TreeSession;
pub use state::CategoryTreeNavigator;
