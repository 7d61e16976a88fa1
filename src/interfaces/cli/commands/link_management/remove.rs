//! Remove record command

use colored::Colorize;

use crate::catalog::CatalogStore;
use crate::interfaces::cli::CliError;

pub fn remove_link(store: &mut CatalogStore, id: i64) -> Result<(), CliError> {
    match store.delete(id)? {
        Some(removed) => {
            println!(
                "{} Deleted: {} ({})",
                "✓".bold().green(),
                removed.title.cyan(),
                format!("id {}", removed.id).dimmed()
            );
            Ok(())
        }
        None => Err(CliError::CommandError(format!(
            "Record does not exist: {}",
            id
        ))),
    }
}
