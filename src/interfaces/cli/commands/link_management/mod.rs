//! Catalog management commands

mod add;
mod helpers;
mod import_export;
mod list;
mod remove;
mod show;
mod update;

pub use add::add_link;
pub use import_export::{export_links, import_links};
pub use list::list_links;
pub use remove::remove_link;
pub use show::show_link;
pub use update::update_link;
