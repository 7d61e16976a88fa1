//! CLI mode
//!
//! Routes a parsed command either to a standalone handler or, after opening
//! the catalog, to the catalog commands.

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::{self, CliError};
use crate::runtime::lifetime::startup::open_catalog;

pub fn run_cli(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    if cli::is_standalone(&cmd) {
        return cli::run_standalone_command(cmd, config);
    }

    let mut store =
        open_catalog(config).map_err(|e| CliError::StorageError(format!("{:#}", e)))?;

    cli::run_cli_command(cmd, &mut store, config)
}
