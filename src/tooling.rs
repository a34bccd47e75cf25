//! Tooling & Integration Layer
//!
//! CLI parsing, command dispatch, and terminal formatting.

pub mod cli;
pub mod output;

pub use cli::{Cli, CliContext, Commands};
