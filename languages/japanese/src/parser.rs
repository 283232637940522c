use std::path::Path;

use kotoba_core::{IngestError, VocabularyStore};
use kotoba_types::{HeaderMatch, ParseContext, VocabularyEntry};

use crate::header;
use crate::vocabulary;

/// What a single note line turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Vocabulary(VocabularyEntry),
    Header(HeaderMatch),
    Ignored,
}

/// Classify one line against the current context.
///
/// Vocabulary bullets are tried first, then headings. Anything else is
/// ignored without complaint; prose and titles are expected in notes.
pub fn parse_line(line: &str, context: &ParseContext) -> ParsedLine {
    if let Some(entry) = vocabulary::extract_entry(line, context) {
        return ParsedLine::Vocabulary(entry);
    }

    match header::classify(line) {
        HeaderMatch::NoMatch => ParsedLine::Ignored,
        found => ParsedLine::Header(found),
    }
}

/// Counts for one pass over a note file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub lines: usize,
    pub entries: usize,
    pub headers: usize,
    pub ignored: usize,
}

/// Line-by-line driver carrying the heading context through a note file
#[derive(Debug, Default)]
pub struct NoteParser {
    context: ParseContext,
    summary: IngestSummary,
}

impl NoteParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    pub fn summary(&self) -> IngestSummary {
        self.summary
    }

    /// Feed the next line. Headings update the context; an entry is returned
    /// for vocabulary bullets.
    pub fn feed(&mut self, line: &str) -> Option<VocabularyEntry> {
        self.summary.lines += 1;

        match parse_line(line, &self.context) {
            ParsedLine::Vocabulary(entry) => {
                self.summary.entries += 1;
                Some(entry)
            }
            ParsedLine::Header(found) => {
                tracing::debug!(line = self.summary.lines, header = ?found, "heading");
                self.summary.headers += 1;
                self.context.apply(found);
                None
            }
            ParsedLine::Ignored => {
                self.summary.ignored += 1;
                None
            }
        }
    }

    /// Parse every line, collecting the entries in order
    pub fn entries<I, S>(lines: I) -> Vec<VocabularyEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = Self::new();
        lines
            .into_iter()
            .filter_map(|line| parser.feed(line.as_ref()))
            .collect()
    }

    /// Parse every line and upsert each entry into `store` as soon as it is
    /// found. The first store failure ends the run; earlier upserts stay.
    pub fn ingest<I, S, T>(lines: I, store: &mut T) -> Result<IngestSummary, IngestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        T: VocabularyStore + ?Sized,
    {
        let mut parser = Self::new();

        for line in lines {
            let Some(entry) = parser.feed(line.as_ref()) else {
                continue;
            };

            store.upsert(&entry).map_err(|source| IngestError::Persist {
                line: parser.summary.lines,
                source,
            })?;
        }

        let summary = parser.summary();
        tracing::info!(
            lines = summary.lines,
            entries = summary.entries,
            headers = summary.headers,
            ignored = summary.ignored,
            "Parsed note file"
        );
        Ok(summary)
    }
}

/// Read a whole note file into lines
pub fn read_note_file(path: &Path) -> Result<Vec<String>, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());

    Ok(content.lines().map(str::to_string).collect())
}
