//! Mode routing
//!
//! Only the CLI mode exists today; it is feature-gated so the library can be
//! embedded without the terminal front end.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::run_cli;
