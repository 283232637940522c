pub mod types;

pub use types::{HeaderMatch, ParseContext, VocabularyEntry};
