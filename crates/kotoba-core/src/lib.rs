pub mod error;
pub mod store;

pub use error::IngestError;
pub use store::{StoreError, UpsertOutcome, VocabularyRecord, VocabularyStore};
