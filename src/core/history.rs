// src/core/history.rs
use crate::models::PasswordRecord;

/// Passwords saved during the current session, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct HistoryStore {
    records: Vec<PasswordRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: PasswordRecord) {
        self.records.push(record);
    }

    /// True when `password` was saved at least twice.
    pub fn is_duplicate(&self, password: &str) -> bool {
        self.records
            .iter()
            .filter(|r| r.password() == password)
            .take(2)
            .count()
            >= 2
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in display order, most recent first.
    pub fn newest_first(&self) -> impl Iterator<Item = &PasswordRecord> {
        self.records.iter().rev()
    }
}
