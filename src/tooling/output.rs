//! Terminal formatting for command results.

use crate::category::{BatchProgress, CategoryListResult, CategoryLookupResult, CreationOutcome};
use crate::catalog::ImportSummary;
use crate::config::QuickCreateConfig;
use crate::error::ApiError;
use owo_colors::OwoColorize;

const RULE: &str = "=======================";

/// Paint `text` green / red when `color` is on.
fn success(text: &str, color: bool) -> String {
    if color {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

fn failure(text: &str, color: bool) -> String {
    if color {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

/// Outcome of `create-category`.
pub fn format_single_outcome(outcome: &CreationOutcome, color: bool) -> String {
    match &outcome.result {
        Ok(id) => format!(
            "{}\n{}",
            success(&format!("all good {} has been created!", outcome.name), color),
            success(&format!("your new category ID is {}", id), color)
        ),
        Err(e) => failure(&format!("no luck {}!", e), color),
    }
}

/// One line per item of a batch.
pub fn format_batch_outcome(outcome: &CreationOutcome, color: bool) -> String {
    match &outcome.result {
        Ok(id) => success(
            &format!("{} has been created! The category ID is {}", outcome.name, id),
            color,
        ),
        Err(e) => failure(&format!("no luck creating {}: {}!", outcome.name, e), color),
    }
}

/// `[###---] 2/6` counter shown after each batch item.
pub fn format_progress(progress: &BatchProgress<'_>) -> String {
    const WIDTH: usize = 20;
    let filled = if progress.total == 0 {
        WIDTH
    } else {
        progress.position * WIDTH / progress.total
    };
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(WIDTH - filled),
        progress.position,
        progress.total
    )
}

/// Banner printed before every navigator prompt.
pub fn format_position(name: &str, id: u64, color: bool) -> String {
    format!(
        "{}\n{}\n{}\n",
        RULE,
        success(&format!("You are currently in: {} [{}]", name, id), color),
        RULE
    )
}

pub fn format_section(title: &str, color: bool) -> String {
    format!("{}\n{}\n{}\n", RULE, success(title, color), RULE)
}

pub fn format_error(error: &dyn std::fmt::Display, color: bool) -> String {
    failure(&error.to_string(), color)
}

pub fn format_list(result: &CategoryListResult, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return serde_json::to_string_pretty(result)
            .map_err(|e| ApiError::OutputError(format!("category list as JSON: {}", e)));
    }
    use comfy_table::Table;
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Path", "ID", "Name"]);
    for item in &result.categories {
        table.add_row(vec![
            item.path.clone(),
            item.category_id.to_string(),
            item.name.clone(),
        ]);
    }
    let mut output = table.to_string();
    if result.collisions > 0 {
        output.push_str(&format!(
            "\n{} path(s) are shared by more than one category; the later category wins.",
            result.collisions
        ));
    }
    Ok(output)
}

/// Effective configuration as TOML.
pub fn format_config(config: &QuickCreateConfig) -> Result<String, ApiError> {
    toml::to_string_pretty(config)
        .map_err(|e| ApiError::OutputError(format!("configuration as TOML: {}", e)))
}

pub fn format_lookup(result: &CategoryLookupResult) -> String {
    match (result.category_id, &result.name) {
        (Some(id), Some(name)) => format!("{} -> {} ({})", result.path, id, name),
        (Some(id), None) => format!("{} -> {}", result.path, id),
        (None, _) => format!("No category found at path: {}", result.path),
    }
}

pub fn format_import(summary: &ImportSummary, db_path: &std::path::Path) -> String {
    format!(
        "Imported {} store(s) and {} categories into {}",
        summary.stores,
        summary.categories,
        db_path.display()
    )
}
