//! List records command

use colored::Colorize;

use super::helpers::print_record;
use crate::catalog::{CatalogStore, CategoryFilter, Record};
use crate::interfaces::cli::CliError;

pub fn list_links(
    store: &mut CatalogStore,
    search: Option<String>,
    category: CategoryFilter,
    json: bool,
) -> Result<(), CliError> {
    store.set_search_term(search.as_deref().unwrap_or_default());
    store.set_category_filter(category);

    let matches: Vec<&Record> = store.query().collect();

    if json {
        let output = serde_json::to_string_pretty(&matches)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize: {}", e)))?;
        println!("{}", output);
        return Ok(());
    }

    if matches.is_empty() {
        println!("{} No videos found", "ℹ".bold().blue());
        if store.filter_state().is_filtering() {
            println!("  {}", "Try a different search term or category".dimmed());
        } else {
            println!(
                "  {}",
                "Add your first one with: reelmark add <TITLE> <LINK>".dimmed()
            );
        }
        return Ok(());
    }

    println!("{}", "Video list:".bold().green());
    println!();
    for record in &matches {
        print_record(record);
        println!();
    }

    if matches.len() == store.len() {
        println!(
            "{} Total {} videos",
            "ℹ".bold().blue(),
            matches.len().to_string().green()
        );
    } else {
        println!(
            "{} Showing {} of {} videos",
            "ℹ".bold().blue(),
            matches.len().to_string().green(),
            store.len()
        );
    }

    Ok(())
}
