//! Japanese study note parsing.
//!
//! Notes are Markdown-like: `## N5` opens a JLPT level, `### Nouns` opens a
//! part of speech, and `- 階 (かい) - floor` lines are vocabulary. Every
//! vocabulary line is labelled with the level and part of speech seen last.

pub mod header;
pub mod jlpt;
pub mod parser;
pub mod vocabulary;

pub use header::classify;
pub use jlpt::{is_level_label, parts_of_speech};
pub use parser::{IngestSummary, NoteParser, ParsedLine, parse_line, read_note_file};
pub use vocabulary::{extract_entry, split_glosses, split_reading};
