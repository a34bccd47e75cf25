//! Environment variable source: QUICKCREATE prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `QUICKCREATE__CATALOG__STORE_ID=2` sets `catalog.store_id`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("QUICKCREATE")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
