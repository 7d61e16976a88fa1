//! CLI interface module
//!
//! Each subcommand is a thin front end over one or two `CatalogStore`
//! operations. The store is opened once by the caller and passed in.

pub mod commands;

use std::fmt;

use crate::catalog::CatalogStore;
use crate::cli::Commands;
use crate::config::StaticConfig;
use commands::{
    add_link, config_management, export_links, import_links, list_links, remove_link, show_link,
    update_link,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::ReelmarkError> for CliError {
    fn from(err: crate::errors::ReelmarkError) -> Self {
        use crate::errors::ReelmarkError;
        match err {
            ReelmarkError::Parse(msg) => CliError::ParseError(msg),
            ReelmarkError::Persistence(msg) => CliError::StorageError(msg),
            other => CliError::CommandError(other.to_string()),
        }
    }
}

/// Whether `cmd` works without opening the catalog
pub fn is_standalone(cmd: &Commands) -> bool {
    matches!(cmd, Commands::Config { .. })
}

/// Run a command that does not touch the catalog
pub fn run_standalone_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Config { action } => config_management::run_config_command(action, config),
        _ => Err(CliError::CommandError(
            "Command needs an open catalog".to_string(),
        )),
    }
}

/// Run a CLI command from clap-parsed input against an open catalog
pub fn run_cli_command(
    cmd: Commands,
    store: &mut CatalogStore,
    config: &StaticConfig,
) -> Result<(), CliError> {
    match cmd {
        Commands::Add {
            title,
            link,
            category,
            description,
        } => add_link(store, title, link, category, description),

        Commands::Remove { id } => remove_link(store, id),

        Commands::Update {
            id,
            title,
            link,
            category,
            description,
        } => update_link(store, id, title, link, category, description),

        Commands::List {
            search,
            category,
            json,
        } => list_links(store, search, category, json),

        Commands::Show { id } => show_link(store, id),

        Commands::Export { file_path, stdout } => {
            let target = if stdout {
                None
            } else {
                Some(file_path.unwrap_or_else(|| config.export.file_name.clone()))
            };
            export_links(store, target)
        }

        Commands::Import { file_path } => import_links(store, file_path),

        Commands::Config { action } => config_management::run_config_command(action, config),
    }
}
