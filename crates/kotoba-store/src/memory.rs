use std::collections::{HashMap, HashSet};

use kotoba_core::{StoreError, UpsertOutcome, VocabularyRecord, VocabularyStore};
use kotoba_types::VocabularyEntry;

/// Vocabulary records kept in insertion order with kanji and kana indexes
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    records: Vec<VocabularyRecord>,
    kanji_index: HashMap<String, usize>,
    kana_index: HashMap<String, usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously saved records
    pub fn from_records(records: Vec<VocabularyRecord>) -> Result<Self, StoreError> {
        let mut ids = HashSet::new();
        let mut store = Self::new();

        for record in records {
            if !ids.insert(record.id) {
                return Err(StoreError::Corrupt(format!("duplicate record id {}", record.id)));
            }
            store.push(record);
        }

        Ok(store)
    }

    pub fn records(&self) -> &[VocabularyRecord] {
        &self.records
    }

    /// Look up by kanji first, then by kana
    pub fn get(&self, key: &str) -> Option<&VocabularyRecord> {
        self.kanji_index
            .get(key)
            .or_else(|| self.kana_index.get(key))
            .and_then(|&idx| self.records.get(idx))
    }

    fn find(&self, entry: &VocabularyEntry) -> Option<usize> {
        if entry.kanji.is_empty() {
            self.kana_index.get(&entry.kana).copied()
        } else {
            self.kanji_index.get(&entry.kanji).copied()
        }
    }

    fn push(&mut self, record: VocabularyRecord) {
        let idx = self.records.len();

        // First record wins an index slot, matching a first-row lookup.
        if !record.kanji.is_empty() {
            self.kanji_index.entry(record.kanji.clone()).or_insert(idx);
        }
        if !record.kana.is_empty() {
            self.kana_index.entry(record.kana.clone()).or_insert(idx);
        }

        self.records.push(record);
    }
}

impl VocabularyStore for InMemoryStore {
    fn upsert(&mut self, entry: &VocabularyEntry) -> Result<UpsertOutcome, StoreError> {
        match self.find(entry) {
            Some(idx) => {
                tracing::debug!(key = entry.key(), english = ?entry.english, labels = ?entry.labels, "updating entry");
                self.records[idx].merge(entry);
                Ok(UpsertOutcome::Updated)
            }
            None => {
                tracing::debug!(key = entry.key(), english = ?entry.english, labels = ?entry.labels, "creating entry");
                self.push(VocabularyRecord::from_entry(entry));
                Ok(UpsertOutcome::Created)
            }
        }
    }

    fn distinct_labels(&self) -> Result<Vec<String>, StoreError> {
        let mut seen = HashSet::new();
        let mut labels = Vec::new();

        for label in self.records.iter().flat_map(|r| &r.labels) {
            if !label.is_empty() && seen.insert(label.as_str()) {
                labels.push(label.clone());
            }
        }

        Ok(labels)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
