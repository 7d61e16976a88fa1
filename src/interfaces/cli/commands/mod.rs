//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

pub mod config_management;
mod link_management;

pub use link_management::*;
