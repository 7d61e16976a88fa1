//! The catalog store
//!
//! Holds the ordered record list (newest first), persists it as one JSON
//! array under one key, and answers filtered queries. Every mutation is
//! computed on a copy, persisted, and only then committed, so the in-memory
//! catalog never diverges from what is stored.

use std::collections::HashSet;

use tracing::{debug, error, info, warn};

use super::ids::IdGenerator;
use super::models::{CategoryFilter, NewRecord, Record, RecordPatch};
use super::query::CatalogQuery;
use crate::errors::{ReelmarkError, Result};
use crate::storage::KvStore;

pub struct CatalogStore {
    storage: Box<dyn KvStore>,
    key: String,
    records: Vec<Record>,
    query: CatalogQuery,
    ids: IdGenerator,
}

impl CatalogStore {
    /// Open the catalog stored under `key`.
    ///
    /// Never fails: a missing value gives an empty catalog, and unreadable
    /// or unparsable content degrades to an empty catalog with a warning.
    /// Unparsable content is copied to `<key>.corrupt` first so the next
    /// write does not destroy it. Entries missing `id` or `dateAdded` are
    /// kept and filled in; duplicate ids are reassigned.
    pub fn load<K: Into<String>>(storage: Box<dyn KvStore>, key: K) -> Self {
        let key = key.into();
        let entries = read_entries(storage.as_ref(), &key);

        let incomplete = entries
            .iter()
            .filter(|e| e.id.is_none() || e.date_added.is_none())
            .count();
        if incomplete > 0 {
            warn!(
                "{} stored records in '{}' lack an id or dateAdded, filled in",
                incomplete, key
            );
        }

        let mut ids = IdGenerator::seeded(entries.iter().filter_map(|e| e.id));
        let mut taken = HashSet::with_capacity(entries.len());
        let records = materialize(entries, &mut ids, &mut taken);

        CatalogStore {
            storage,
            key,
            records,
            query: CatalogQuery::new(),
            ids,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend_name(&self) -> &'static str {
        self.storage.backend_name()
    }

    /// The full, unfiltered catalog.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Prepend a new record and persist.
    pub fn add(&mut self, new: NewRecord) -> Result<Record> {
        let taken: HashSet<i64> = self.records.iter().map(|r| r.id).collect();
        let mut ids = self.ids.clone();
        let id = assign_id(&mut ids, new.id, &taken);
        let record = new.into_record(id);

        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.push(record.clone());
        next.extend(self.records.iter().cloned());
        self.commit(next)?;
        self.ids = ids;

        info!("Added record {} ({})", record.id, record.title);
        Ok(record)
    }

    /// Remove the record with `id` and persist.
    ///
    /// Returns `Ok(None)` without touching storage when no record has that id.
    pub fn delete(&mut self, id: i64) -> Result<Option<Record>> {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            debug!("Delete of unknown id {} ignored", id);
            return Ok(None);
        };

        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!("Deleted record {} ({})", removed.id, removed.title);
        Ok(Some(removed))
    }

    /// Edit a record in place, keeping its position, id and date added.
    pub fn update(&mut self, id: i64, patch: RecordPatch) -> Result<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ReelmarkError::not_found(format!("No record with id {}", id)))?;

        let mut next = self.records.clone();
        patch.apply(&mut next[index]);
        let updated = next[index].clone();
        self.commit(next)?;

        info!("Updated record {}", id);
        Ok(updated)
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.query.set_search_term(term);
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.query.set_category_filter(category);
    }

    pub fn search_term(&self) -> &str {
        self.query.search_term()
    }

    pub fn category_filter(&self) -> &CategoryFilter {
        self.query.category_filter()
    }

    pub fn filter_state(&self) -> &CatalogQuery {
        &self.query
    }

    /// Records matching the current search term and category filter, in
    /// catalog order. Always evaluated against the full catalog.
    pub fn query(&self) -> impl Iterator<Item = &Record> + '_ {
        self.query.apply(&self.records)
    }

    pub fn query_count(&self) -> usize {
        self.query().count()
    }

    /// Pretty-printed JSON array of the whole catalog.
    pub fn export_all(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Append every record in `json` (a JSON array) to the end of the
    /// catalog and persist. All or nothing: on any error the catalog is
    /// left as it was.
    ///
    /// Entries without an id, or whose id is already taken, get a fresh one.
    pub fn import_merge(&mut self, json: &str) -> Result<usize> {
        let entries: Vec<NewRecord> = serde_json::from_str(json).map_err(|e| {
            ReelmarkError::parse(format!("Import is not a valid JSON array of records: {}", e))
        })?;

        if entries.is_empty() {
            info!("Import contained no records");
            return Ok(0);
        }

        let mut taken: HashSet<i64> = self.records.iter().map(|r| r.id).collect();
        let mut ids = self.ids.clone();
        let appended = materialize(entries, &mut ids, &mut taken);
        let imported = appended.len();

        let mut next = self.records.clone();
        next.extend(appended);
        self.commit(next)?;
        self.ids = ids;

        info!("Imported {} records", imported);
        Ok(imported)
    }

    fn commit(&mut self, next: Vec<Record>) -> Result<()> {
        let json = serde_json::to_string(&next)?;
        if let Err(e) = self.storage.set(&self.key, &json) {
            error!("Failed to persist catalog '{}': {}", self.key, e);
            return Err(e);
        }

        self.records = next;
        Ok(())
    }
}

/// Pick the id for an entry: the requested one when free, otherwise a fresh
/// one that is not in `taken`.
fn assign_id(ids: &mut IdGenerator, requested: Option<i64>, taken: &HashSet<i64>) -> i64 {
    match requested {
        Some(id) if !taken.contains(&id) => {
            ids.observe(id);
            id
        }
        Some(id) => {
            let fresh = ids.next_free(taken);
            warn!("Id {} already in use, reassigned to {}", id, fresh);
            fresh
        }
        None => ids.next_free(taken),
    }
}

fn materialize(
    entries: Vec<NewRecord>,
    ids: &mut IdGenerator,
    taken: &mut HashSet<i64>,
) -> Vec<Record> {
    entries
        .into_iter()
        .map(|entry| {
            let id = assign_id(ids, entry.id, taken);
            taken.insert(id);
            entry.into_record(id)
        })
        .collect()
}

fn read_entries(storage: &dyn KvStore, key: &str) -> Vec<NewRecord> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No stored catalog under '{}', starting empty", key);
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read catalog '{}', starting empty: {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<NewRecord>>(&raw) {
        Ok(entries) => {
            info!("Loaded {} records from '{}'", entries.len(), key);
            entries
        }
        Err(e) => {
            warn!("Stored catalog '{}' is corrupt, starting empty: {}", key, e);
            let backup_key = format!("{}.corrupt", key);
            match storage.set(&backup_key, &raw) {
                Ok(()) => warn!("Corrupt catalog preserved under '{}'", backup_key),
                Err(e) => error!("Failed to preserve corrupt catalog: {}", e),
            }
            Vec::new()
        }
    }
}
