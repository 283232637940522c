use std::path::PathBuf;

use chrono::{DateTime, Utc};
use kotoba_types::VocabularyEntry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persistence collaborator for parsed vocabulary
pub trait VocabularyStore {
    /// Insert the entry, or merge it into the record stored under the same key.
    ///
    /// The key is the kanji when present, otherwise the kana. A merge
    /// replaces the english glosses and labels and leaves everything else.
    fn upsert(&mut self, entry: &VocabularyEntry) -> Result<UpsertOutcome, StoreError>;

    /// Every distinct non-empty label across all records, first seen first
    fn distinct_labels(&self) -> Result<Vec<String>, StoreError>;

    /// Number of stored records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// A stored vocabulary entry plus record metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    pub id: Uuid,
    pub kanji: String,
    pub kana: String,
    pub english: Vec<String>,
    pub labels: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VocabularyRecord {
    pub fn from_entry(entry: &VocabularyEntry) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kanji: entry.kanji.clone(),
            kana: entry.kana.clone(),
            english: entry.english.clone(),
            labels: entry.labels.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Last write wins for glosses and labels; id, timestamps of creation,
    /// kanji and kana stay as first stored.
    pub fn merge(&mut self, entry: &VocabularyEntry) {
        self.english = entry.english.clone();
        self.labels = entry.labels.clone();
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Store already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Corrupt store: {0}")]
    Corrupt(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use kotoba_types::ParseContext;

    fn entry(kanji: &str, kana: &str, english: &[&str], level: &str) -> VocabularyEntry {
        let context = ParseContext {
            level: level.to_string(),
            part_of_speech: "Nouns".to_string(),
        };
        VocabularyEntry::new(
            kanji.to_string(),
            kana.to_string(),
            english.iter().map(|s| s.to_string()).collect(),
            &context,
        )
    }

    #[test]
    fn test_merge_replaces_glosses_and_labels() {
        let mut record = VocabularyRecord::from_entry(&entry("階", "かい", &["floor"], "N5"));
        let id = record.id;
        let created_at = record.created_at;

        record.merge(&entry("階", "がい", &["storey", "floor"], "N4"));

        assert_eq!(record.id, id);
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.kana, "かい");
        assert_eq!(record.english, vec!["storey", "floor"]);
        assert_eq!(record.labels, vec!["N4", "Nouns"]);
        assert!(record.updated_at >= created_at);
    }

    #[test]
    fn test_record_timestamps_serialize_as_rfc3339() {
        let record = VocabularyRecord::from_entry(&entry("階", "かい", &["floor"], "N5"));
        let json = serde_json::to_value(&record).unwrap();

        let created_at = json["created_at"].as_str().unwrap();
        assert_eq!(created_at.parse::<DateTime<Utc>>().unwrap(), record.created_at);

        let back: VocabularyRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_store_error_messages() {
        let err = StoreError::NotFound(PathBuf::from("vocab.json"));
        assert_eq!(err.to_string(), "Store not found: vocab.json");

        let err = StoreError::Corrupt("duplicate id".to_string());
        assert_eq!(err.to_string(), "Corrupt store: duplicate id");
    }
}
