//! Built-in defaults every load starts from.

use crate::config::{DEFAULT_PARENT_ID, DEFAULT_SEPARATOR, DEFAULT_STORE_ID};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("catalog.store_id", i64::from(DEFAULT_STORE_ID))?
        .set_default("catalog.default_parent_id", DEFAULT_PARENT_ID as i64)?
        .set_default("catalog.separator", DEFAULT_SEPARATOR)?
        .set_default("defaults.is_active", true)?
        .set_default("defaults.is_anchor", true)?
        .set_default("defaults.include_in_menu", true)
}
