//! Add record command

use colored::Colorize;

use super::helpers::check_input;
use crate::catalog::{CatalogStore, Category, NewRecord};
use crate::interfaces::cli::CliError;

pub fn add_link(
    store: &mut CatalogStore,
    title: String,
    link: String,
    category: Category,
    description: String,
) -> Result<(), CliError> {
    check_input(Some(&title), Some(&link))?;

    if !category.is_known() {
        println!(
            "{} Unknown category '{}', stored as-is",
            "⚠".bold().yellow(),
            category.as_str().yellow()
        );
    }

    let new = NewRecord::new(title.trim(), link.trim(), category).with_description(description);
    let record = store.add(new)?;

    println!(
        "{} Added: {} -> {} ({})",
        "✓".bold().green(),
        record.title.cyan(),
        record.link.blue().underline(),
        format!("id {}", record.id).dimmed()
    );

    Ok(())
}
