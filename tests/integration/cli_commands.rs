use clap::Parser;
use quickcreate::catalog::{CategoryStore, InMemoryCatalog, StoreScope};
use quickcreate::config::QuickCreateConfig;
use quickcreate::tooling::cli::{execute_without_catalog, Cli, CliContext, Commands};
use std::io::Write;

use crate::integration::support::{sample_catalog, SAMPLE_DOCUMENT};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["quickcreate", "create-category", "Phones"],
        vec!["quickcreate", "create-category", "Phones", "--parent-id", "3"],
        vec!["quickcreate", "create-category", "Phones", "-p", "3", "--inactive"],
        vec!["quickcreate", "create-category-tree"],
        vec!["quickcreate", "--store-id", "2", "create-category-tree"],
        vec!["quickcreate", "import", "catalog.json"],
        vec!["quickcreate", "lookup", "electronics/phones"],
        vec!["quickcreate", "list", "--format", "json"],
        vec!["quickcreate", "--log-output", "stderr", "config"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_invalid_input() {
    assert!(Cli::try_parse_from(["quickcreate", "create-category"]).is_err());
    assert!(
        Cli::try_parse_from(["quickcreate", "create-category", "A", "--parent-id", "x"]).is_err()
    );
    assert!(Cli::try_parse_from(["quickcreate", "create-category-tree", "extra"]).is_err());
}

#[test]
fn parse_create_category_fields() {
    let cli = Cli::try_parse_from(["quickcreate", "create-category", "Phones", "-p", "3"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::CreateCategory {
            name: "Phones".to_string(),
            parent_id: Some(3),
            inactive: false,
            no_anchor: false,
            exclude_from_menu: false,
        }
    );
}

#[test]
fn cli_overrides_fold_into_config() {
    let cli = Cli::try_parse_from([
        "quickcreate",
        "--store-id",
        "4",
        "--log-level",
        "debug",
        "--no-color",
        "list",
    ])
    .unwrap();
    let mut config = QuickCreateConfig::default();
    cli.apply_overrides(&mut config);
    assert_eq!(config.catalog.store_id, 4);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.color);
}

#[test]
fn create_category_failure_is_reported_not_raised() {
    let context = CliContext::with_store(QuickCreateConfig::default(), sample_catalog());
    // The default fallback parent (64) does not exist in the sample catalog.
    let output = context
        .execute(&Commands::CreateCategory {
            name: "Orphan".to_string(),
            parent_id: None,
            inactive: false,
            no_anchor: false,
            exclude_from_menu: false,
        })
        .unwrap();
    assert_eq!(output, "no luck Category not found: 64!");
}

#[test]
fn create_category_success_reports_new_id() {
    let context = CliContext::with_store(QuickCreateConfig::default(), sample_catalog());
    let output = context
        .execute(&Commands::CreateCategory {
            name: "Smart Watches".to_string(),
            parent_id: Some(3),
            inactive: true,
            no_anchor: false,
            exclude_from_menu: false,
        })
        .unwrap();
    assert!(output.contains("all good Smart Watches has been created!"));
    assert!(output.contains("your new category ID is 6"));
    assert!(!context.store().get_category(6, None).unwrap().is_active);
}

#[test]
fn lookup_and_list_use_the_index() {
    let context = CliContext::with_store(QuickCreateConfig::default(), sample_catalog());
    let found = context
        .execute(&Commands::Lookup {
            path: "Default Category/Electronics/Phones".to_string(),
        })
        .unwrap();
    assert_eq!(found, "Default Category/Electronics/Phones -> 4 (Phones)");

    let json = context
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["categories"].as_array().unwrap().len(), 4);

    let table = context
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(table.contains("default category/garden"));
}

#[test]
fn import_command_seeds_store() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(SAMPLE_DOCUMENT.as_bytes()).unwrap();

    let context = CliContext::with_store(QuickCreateConfig::default(), InMemoryCatalog::new());
    let output = context
        .execute(&Commands::Import {
            file: file.path().to_path_buf(),
        })
        .unwrap();
    assert!(output.starts_with("Imported 1 store(s) and 4 categories"));
    assert_eq!(context.store().list_all(StoreScope::DEFAULT).unwrap().len(), 4);

    let found = context
        .execute(&Commands::Lookup {
            path: "default category/electronics/tv\\/audio".to_string(),
        })
        .unwrap();
    assert!(found.contains("-> 4"));
}

#[test]
fn config_command_prints_toml() {
    let context = CliContext::with_store(QuickCreateConfig::default(), InMemoryCatalog::new());
    let output = context.execute(&Commands::Config).unwrap();
    assert!(output.contains("[catalog]"));
    assert!(output.contains("default_parent_id = 64"));
}

#[test]
fn config_command_does_not_open_the_catalog() {
    // A regular file where the catalog directory should be: opening fails.
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let mut config = QuickCreateConfig::default();
    config.catalog.db_path = Some(blocker.path().join("catalog"));
    assert!(CliContext::new(config.clone(), false).is_err());

    let output = execute_without_catalog(&config, &Commands::Config)
        .expect("config needs no catalog")
        .unwrap();
    assert!(output.contains("default_parent_id = 64"));

    let list = Commands::List {
        format: "text".to_string(),
    };
    assert!(execute_without_catalog(&config, &list).is_none());
}
