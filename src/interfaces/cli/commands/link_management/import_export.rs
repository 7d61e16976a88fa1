//! Import and export commands

use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::catalog::CatalogStore;
use crate::interfaces::cli::CliError;

/// Export the whole catalog. `None` writes to stdout.
pub fn export_links(store: &CatalogStore, file_path: Option<String>) -> Result<(), CliError> {
    let json = store.export_all()?;

    let Some(output_path) = file_path else {
        println!("{}", json);
        return Ok(());
    };

    if store.is_empty() {
        println!("{} Catalog is empty, exporting an empty list", "ℹ".bold().blue());
    }

    fs::write(&output_path, json).map_err(|e| {
        CliError::CommandError(format!(
            "Failed to create export file '{}': {}",
            output_path, e
        ))
    })?;

    println!(
        "{} Exported {} videos from '{}' ({} backend) to: {}",
        "✓".bold().green(),
        store.len().to_string().green(),
        store.key(),
        store.backend_name(),
        output_path.cyan()
    );

    Ok(())
}

/// Append the records in a JSON export file to the catalog.
pub fn import_links(store: &mut CatalogStore, file_path: String) -> Result<(), CliError> {
    if !Path::new(&file_path).exists() {
        return Err(CliError::CommandError(format!(
            "Import file not found: {}",
            file_path
        )));
    }

    let content = fs::read_to_string(&file_path).map_err(|e| {
        CliError::CommandError(format!("Failed to read import file '{}': {}", file_path, e))
    })?;

    let imported = store.import_merge(&content)?;

    if imported == 0 {
        println!("{} Import file is empty", "ℹ".bold().blue());
    } else {
        println!(
            "{} Imported {} videos from: {} (catalog now has {})",
            "✓".bold().green(),
            imported.to_string().green(),
            file_path.cyan(),
            store.len()
        );
    }

    Ok(())
}
