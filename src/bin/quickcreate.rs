//! QuickCreate CLI Binary

use anyhow::Context;
use clap::Parser;
use quickcreate::logging::init_logging;
use quickcreate::tooling::cli::{execute_without_catalog, load_config, Cli, CliContext};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    init_logging(&config.logging).context("Failed to initialize logging")?;

    if let Some(output) = execute_without_catalog(&config, &cli.command) {
        println!("{}", output?);
        return Ok(());
    }

    let color = config.logging.color;
    let context = CliContext::new(config, color).context("Failed to open catalog")?;

    let output = context.execute(&cli.command)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
