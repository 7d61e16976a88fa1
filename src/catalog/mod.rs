//! Video link catalog: data model, filtering and the persistent store.

mod ids;
mod models;
mod query;
mod store;

pub use ids::IdGenerator;
pub use models::{Category, CategoryFilter, MediaKind, NewRecord, Record, RecordPatch};
pub use query::CatalogQuery;
pub use store::CatalogStore;
