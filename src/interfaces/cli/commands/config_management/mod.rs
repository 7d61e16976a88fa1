//! Configuration management CLI commands

mod config_gen;

use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

pub use config_gen::config_generate;

/// Run a config subcommand
pub fn run_config_command(cmd: ConfigCommands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
        ConfigCommands::Show => config_show(config),
    }
}

fn config_show(config: &StaticConfig) -> Result<(), CliError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| CliError::CommandError(format!("Failed to render config: {}", e)))?;

    println!("{}", "Effective configuration:".bold().green());
    println!();
    println!("{}", rendered);
    Ok(())
}
