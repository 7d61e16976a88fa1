use std::collections::HashSet;

use chrono::Utc;

/// Hands out strictly increasing record ids (see [`IdGenerator::next_free`]
/// for what happens once `i64::MAX` is reached).
///
/// Ids track wall-clock milliseconds so they stay comparable with ids
/// written by older timestamp-based tooling, but never repeat: two inserts in
/// the same millisecond get consecutive values.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start above every id in `ids`.
    pub fn seeded<I: IntoIterator<Item = i64>>(ids: I) -> Self {
        let mut generator = Self::new();
        for id in ids {
            generator.observe(id);
        }
        generator
    }

    /// Record an id that is already taken.
    pub fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }

    pub fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    /// Like [`IdGenerator::next_id`], but never returns a member of `taken`.
    ///
    /// Once the counter is pinned at `i64::MAX` the lowest free positive id
    /// is handed out instead.
    pub fn next_free(&mut self, taken: &HashSet<i64>) -> i64 {
        let id = self.next_id();
        if !taken.contains(&id) {
            return id;
        }

        let mut candidate = 1;
        while taken.contains(&candidate) {
            candidate += 1;
        }
        candidate
    }
}
