//! User-facing front ends over the catalog

#[cfg(feature = "cli")]
pub mod cli;
