//! JSON file backed vocabulary store.
//!
//! The whole store lives in one JSON document. Every upsert rewrites the
//! document through a synced temporary file in the same directory that is
//! then renamed over the old one. Readers see either the previous document
//! or the new one. A failed write leaves the in-memory records as they were.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use kotoba_core::{StoreError, UpsertOutcome, VocabularyRecord, VocabularyStore};
use kotoba_types::VocabularyEntry;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::memory::InMemoryStore;

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    records: Vec<VocabularyRecord>,
}

pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
    inner: InMemoryStore,
}

impl JsonFileStore {
    /// Create a new, empty store file.
    ///
    /// An existing file is an error unless `overwrite` is set, in which case
    /// it is removed first.
    pub fn create(path: impl Into<PathBuf>, overwrite: bool) -> Result<Self, StoreError> {
        let path = path.into();

        if path.exists() {
            if !overwrite {
                return Err(StoreError::AlreadyExists(path));
            }
            fs::remove_file(&path)?;
            tracing::info!("Removed existing store {}", path.display());
        }

        let store = Self {
            path,
            pretty: true,
            inner: InMemoryStore::new(),
        };
        store.save()?;
        Ok(store)
    }

    /// Open an existing store file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Err(StoreError::NotFound(path));
        }

        let data = fs::read(&path)?;
        let document: StoreDocument = serde_json::from_slice(&data)?;
        if document.version != FORMAT_VERSION {
            return Err(StoreError::Corrupt(format!(
                "unsupported store version {}",
                document.version
            )));
        }

        let inner = InMemoryStore::from_records(document.records)?;
        tracing::debug!("Loaded {} records from {}", inner.len(), path.display());

        Ok(Self {
            path,
            pretty: true,
            inner,
        })
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[VocabularyRecord] {
        self.inner.records()
    }

    fn save(&self) -> Result<(), StoreError> {
        let document = StoreDocument {
            version: FORMAT_VERSION,
            records: self.inner.records().to_vec(),
        };
        let json = if self.pretty {
            serde_json::to_vec_pretty(&document)?
        } else {
            serde_json::to_vec(&document)?
        };

        write_atomically(&self.path, &json)
    }
}

impl VocabularyStore for JsonFileStore {
    fn upsert(&mut self, entry: &VocabularyEntry) -> Result<UpsertOutcome, StoreError> {
        let snapshot = self.inner.clone();
        let outcome = self.inner.upsert(entry)?;
        if let Err(e) = self.save() {
            self.inner = snapshot;
            return Err(e);
        }
        Ok(outcome)
    }

    fn distinct_labels(&self) -> Result<Vec<String>, StoreError> {
        self.inner.distinct_labels()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

fn write_atomically(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(data)?;
    temp_file.flush()?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| StoreError::Io(e.error))?;

    Ok(())
}
