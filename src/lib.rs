//! Reelmark - a local catalog of video links
//!
//! Entries (title, link, category, description) are kept in an ordered
//! list, newest first, persisted as a single JSON array under one key of a
//! local key-value store, and queried with a case-insensitive search term
//! and a category filter.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//!
//! # Architecture
//! - `catalog`: Data model, id generation, filtering and the `CatalogStore`
//! - `storage`: Key-value backends (`file`, `memory`)
//! - `config`: Configuration loading (TOML + environment)
//! - `interfaces`: User interfaces (CLI)
//! - `runtime`: Startup and execution modes
//! - `system`: Logging

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod storage;
pub mod system;
pub mod utils;
