//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for reelmark using clap's derive macros.

use clap::{Parser, Subcommand};

use crate::catalog::{Category, CategoryFilter};

/// Reelmark - a local catalog of video links
#[derive(Parser, Debug)]
#[command(name = "reelmark")]
#[command(version)]
#[command(about = "Keep, search and export a local catalog of video links", long_about = None)]
pub struct Cli {
    /// Configuration file (default: reelmark.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the storage data directory
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a video link to the catalog
    Add {
        /// Display title
        title: String,

        /// Media URL (direct file or .m3u8 playlist)
        link: String,

        /// action, drama, comedy, horror, romance, sci-fi, documentary, other
        #[arg(long, short = 'g', default_value = "other")]
        category: Category,

        /// Free-form description
        #[arg(long, short = 'd', default_value = "")]
        description: String,
    },

    /// Remove an entry by id
    Remove {
        /// Record id
        id: i64,
    },

    /// Edit an entry in place
    Update {
        /// Record id
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New link
        #[arg(long)]
        link: Option<String>,

        /// New category
        #[arg(long, short = 'g')]
        category: Option<Category>,

        /// New description (empty string clears it)
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// List entries, optionally searched and filtered
    List {
        /// Case-insensitive text matched against title and description
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Category to show, or "all"
        #[arg(long, short = 'g', default_value = "all")]
        category: CategoryFilter,

        /// Print the matching records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one entry with its playback hint
    Show {
        /// Record id
        id: i64,
    },

    /// Export the whole catalog to a JSON file
    Export {
        /// Output file path (default: [export].file_name, "movies.json")
        file_path: Option<String>,

        /// Write to stdout instead of a file
        #[arg(long, conflicts_with = "file_path")]
        stdout: bool,
    },

    /// Append entries from a JSON file to the catalog
    Import {
        /// Input file path
        file_path: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: reelmark.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
