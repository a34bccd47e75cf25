//! CLI Tooling
//!
//! Command-line interface for category creation and tree navigation.

use crate::catalog::{CategoryStore, SledCatalog, StoreScope};
use crate::category::{BatchCategoryCreator, CategoryCommandService, CategoryCreator};
use crate::config::{CategoryDefaults, ConfigLoader, QuickCreateConfig};
use crate::error::ApiError;
use crate::index::PathIndex;
use crate::navigator::{CategoryTreeNavigator, DialoguerPrompt, NavigatorPrompt, TreeSession};
use crate::tooling::output;
use crate::types::{CategoryId, StoreId};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// QuickCreate CLI - quick category creation for catalog administration
#[derive(Parser)]
#[command(name = "quickcreate")]
#[command(about = "Create catalog categories one at a time or as a tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Catalog database path (overrides catalog.db_path)
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    /// Store whose root category the tree navigator starts at
    #[arg(long)]
    pub store_id: Option<StoreId>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Add a category
    CreateCategory {
        /// Category name
        name: String,
        /// Parent category ID (default: catalog.default_parent_id)
        #[arg(long, short = 'p')]
        parent_id: Option<CategoryId>,
        /// Create the category disabled
        #[arg(long)]
        inactive: bool,
        /// Create the category as a non-anchor
        #[arg(long)]
        no_anchor: bool,
        /// Keep the category out of navigation menus
        #[arg(long)]
        exclude_from_menu: bool,
    },
    /// Browse the category tree and bulk-create sub-categories
    CreateCategoryTree,
    /// Seed the catalog database from a JSON document
    Import {
        /// Path to the JSON catalog document
        file: PathBuf,
    },
    /// Resolve a slash-delimited category path to its ID
    Lookup {
        /// Category path, e.g. electronics/phones
        path: String,
    },
    /// List every category path with its ID
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration
    Config,
}

impl Cli {
    /// Fold CLI overrides into a loaded configuration.
    pub fn apply_overrides(&self, config: &mut QuickCreateConfig) {
        if let Some(path) = &self.db_path {
            config.catalog.db_path = Some(path.clone());
        }
        if let Some(store_id) = self.store_id {
            config.catalog.store_id = store_id;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if self.no_color {
            config.logging.color = false;
        }
    }
}

/// Load configuration from `config_path` (or the standard sources).
pub fn load_config(config_path: Option<&PathBuf>) -> Result<QuickCreateConfig, ApiError> {
    let config = match config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    config.validate()?;
    Ok(config)
}

/// Output of a command that needs no catalog, or None when the command
/// has to open one.
pub fn execute_without_catalog(
    config: &QuickCreateConfig,
    command: &Commands,
) -> Option<Result<String, ApiError>> {
    match command {
        Commands::Config => Some(output::format_config(config)),
        _ => None,
    }
}

/// CLI context: configuration plus an open catalog store.
pub struct CliContext<S: CategoryStore = SledCatalog> {
    config: QuickCreateConfig,
    store: S,
    db_path: Option<PathBuf>,
    color: bool,
}

impl CliContext<SledCatalog> {
    /// Open the catalog database named by `config`.
    pub fn new(config: QuickCreateConfig, color: bool) -> Result<Self, ApiError> {
        let db_path = config.catalog.resolve_db_path()?;
        let store = SledCatalog::open(&db_path)?;
        info!(db_path = %db_path.display(), "Catalog opened");
        Ok(Self {
            config,
            store,
            db_path: Some(db_path),
            color,
        })
    }
}

impl<S: CategoryStore> CliContext<S> {
    /// Context over an already-open store.
    pub fn with_store(config: QuickCreateConfig, store: S) -> Self {
        Self {
            config,
            store,
            db_path: None,
            color: false,
        }
    }

    pub fn config(&self) -> &QuickCreateConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Full scan of the catalog at the default scope.
    pub fn build_index(&self) -> Result<PathIndex, ApiError> {
        let records = self.store.list_all(StoreScope::DEFAULT)?;
        Ok(PathIndex::build(records))
    }

    /// Execute a non-interactive command and return its output.
    ///
    /// `create-category-tree` runs on the terminal; use
    /// [`CliContext::run_tree`] to drive it with another prompt.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::CreateCategory {
                name,
                parent_id,
                inactive,
                no_anchor,
                exclude_from_menu,
            } => {
                let index = self.build_index()?;
                let attributes = CategoryDefaults {
                    is_active: self.config.defaults.is_active && !inactive,
                    is_anchor: self.config.defaults.is_anchor && !no_anchor,
                    include_in_menu: self.config.defaults.include_in_menu && !exclude_from_menu,
                };
                let outcome = CategoryCommandService::create(
                    &self.store,
                    &index,
                    &self.config,
                    name,
                    *parent_id,
                    attributes,
                );
                Ok(output::format_single_outcome(&outcome, self.color))
            }
            Commands::CreateCategoryTree => {
                let stdout = std::io::stdout();
                self.run_tree(DialoguerPrompt::new(), stdout.lock())?;
                Ok(String::new())
            }
            Commands::Import { file } => {
                let summary = CategoryCommandService::import(&self.store, file)?;
                let db_path = self.db_path.clone().unwrap_or_default();
                Ok(output::format_import(&summary, &db_path))
            }
            Commands::Lookup { path } => {
                let index = self.build_index()?;
                Ok(output::format_lookup(&CategoryCommandService::lookup(
                    &index, path,
                )))
            }
            Commands::List { format } => {
                let index = self.build_index()?;
                output::format_list(&CategoryCommandService::list(&index), format)
            }
            Commands::Config => output::format_config(&self.config),
        }
    }

    /// Run the interactive tree session with `prompt`, writing to `out`.
    pub fn run_tree<P, W>(&self, prompt: P, out: W) -> Result<W, ApiError>
    where
        P: NavigatorPrompt,
        W: Write,
    {
        let index = self.build_index()?;
        let scope = StoreScope(self.config.catalog.store_id);
        let navigator = CategoryTreeNavigator::new(&self.store, scope)?;
        let creator = CategoryCreator::new(
            &self.store,
            &index,
            self.config.defaults,
            self.config.catalog.default_parent_id,
        );
        let batch = BatchCategoryCreator::new(creator, self.config.catalog.separator.clone());
        let mut session = TreeSession::new(
            navigator,
            batch,
            prompt,
            out,
            self.config.catalog.separator.clone(),
        )
        .with_color(self.color);
        session.run()?;
        Ok(session.into_output())
    }
}
