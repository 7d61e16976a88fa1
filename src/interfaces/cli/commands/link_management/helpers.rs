//! Helper functions for catalog CLI commands

use colored::Colorize;

use crate::catalog::{MediaKind, Record};
use crate::interfaces::cli::CliError;
use crate::utils::link_validator::{validate_link, validate_title};

/// Reject empty titles and links a player could not open.
pub fn check_input(title: Option<&str>, link: Option<&str>) -> Result<(), CliError> {
    if let Some(title) = title {
        validate_title(title).map_err(|e| CliError::CommandError(e.to_string()))?;
    }
    if let Some(link) = link {
        validate_link(link).map_err(|e| CliError::CommandError(e.to_string()))?;
    }
    Ok(())
}

pub fn media_badge(kind: MediaKind) -> String {
    match kind {
        MediaKind::Hls => kind.to_string().magenta().to_string(),
        MediaKind::Direct => kind.to_string().dimmed().to_string(),
    }
}

/// Multi-line summary used by `list` and `show`
pub fn print_record(record: &Record) {
    println!(
        "  {} {} {}",
        record.title.bold(),
        format!("[{}]", record.category.label()).yellow(),
        format!("#{}", record.id).dimmed()
    );
    println!(
        "    {} {}",
        record.link.blue().underline(),
        media_badge(record.media_kind())
    );

    if record.description.is_empty() {
        println!("    {}", "No description".dimmed().italic());
    } else {
        println!("    {}", record.description);
    }
}
