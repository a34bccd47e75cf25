//! Category Path Index
//!
//! Maps human-readable category paths (`electronics/phones`) to category ids.
//! Built once per command from a full scan of the catalog and read-only
//! afterwards.

pub mod codec;
pub mod path_index;

pub use codec::{
    quote_delimiter, split_path, standardize, trim_delimiters, unquote_delimiter, DELIMITER,
    ESCAPE,
};
pub use path_index::{PathCollision, PathIndex};
