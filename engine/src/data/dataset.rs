// Holds the record set of the most recent import
use chrono::{DateTime, Utc};
use shared::models::StoreRecord;

/// The current record set. Each import replaces it wholesale: records are never merged,
/// appended or removed individually, since ids are positional per import.
#[derive(Debug, Default)]
pub struct StoreDataset {
    records: Vec<StoreRecord>,
    source: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
}

impl StoreDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, source: &str, records: Vec<StoreRecord>) {
        tracing::debug!(
            source,
            previous = self.records.len(),
            current = records.len(),
            "Replacing store dataset"
        );
        self.records = records;
        self.source = Some(source.to_string());
        self.loaded_at = Some(Utc::now());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn records(&self) -> &[StoreRecord] {
        &self.records
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }
}
