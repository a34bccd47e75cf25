//! QuickCreate: category creation and tree navigation for catalog administration
//!
//! Builds a path index over a catalog snapshot (`electronics/phones` -> id),
//! creates categories one at a time or in batches, and walks the category
//! tree interactively.

pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod navigator;
pub mod tooling;
pub mod types;
