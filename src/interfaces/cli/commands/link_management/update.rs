//! Update record command

use colored::Colorize;

use super::helpers::check_input;
use crate::catalog::{CatalogStore, Category, RecordPatch};
use crate::interfaces::cli::CliError;

pub fn update_link(
    store: &mut CatalogStore,
    id: i64,
    title: Option<String>,
    link: Option<String>,
    category: Option<Category>,
    description: Option<String>,
) -> Result<(), CliError> {
    check_input(title.as_deref(), link.as_deref())?;

    let patch = RecordPatch {
        title: title.map(|t| t.trim().to_string()),
        link: link.map(|l| l.trim().to_string()),
        category,
        description,
    };

    if patch.is_empty() {
        return Err(CliError::CommandError(
            "Nothing to update: pass at least one of --title, --link, --category, --description"
                .to_string(),
        ));
    }

    let record = store.update(id, patch)?;

    println!(
        "{} Updated: {} -> {} [{}]",
        "✓".bold().green(),
        record.title.cyan(),
        record.link.blue().underline(),
        record.category.label().yellow()
    );

    Ok(())
}
