//! Show a single record with its playback hint

use colored::Colorize;

use super::helpers::print_record;
use crate::catalog::CatalogStore;
use crate::interfaces::cli::CliError;

pub fn show_link(store: &CatalogStore, id: i64) -> Result<(), CliError> {
    let record = store
        .get(id)
        .ok_or_else(|| CliError::CommandError(format!("Record does not exist: {}", id)))?;

    print_record(record);

    let kind = record.media_kind();
    println!();
    println!("    {} {}", "Player type:".bold(), kind.mime_type().cyan());
    println!(
        "    {} {}",
        "Added:".bold(),
        record.date_added.format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(())
}
