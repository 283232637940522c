use serde::{Deserialize, Serialize};

/// A vocabulary line extracted from a note file.
///
/// `kana` is always populated when `kanji` is empty. `labels` is the
/// `[level, part_of_speech]` pair that was current when the line was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub kanji: String,
    pub kana: String,
    pub english: Vec<String>,
    pub labels: Vec<String>,
}

impl VocabularyEntry {
    pub fn new(kanji: String, kana: String, english: Vec<String>, context: &ParseContext) -> Self {
        Self {
            kanji,
            kana,
            english,
            labels: context.labels(),
        }
    }

    /// Key the entry is stored under: kanji when present, otherwise kana
    pub fn key(&self) -> &str {
        if self.kanji.is_empty() {
            &self.kana
        } else {
            &self.kanji
        }
    }
}

/// Most recently seen headings, carried from line to line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    pub level: String,
    pub part_of_speech: String,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current headings in label order
    pub fn labels(&self) -> Vec<String> {
        vec![self.level.clone(), self.part_of_speech.clone()]
    }

    /// Last one wins; a level heading never clears the part of speech and vice versa.
    pub fn apply(&mut self, header: HeaderMatch) {
        match header {
            HeaderMatch::Level(level) => self.level = level,
            HeaderMatch::PartOfSpeech(part_of_speech) => self.part_of_speech = part_of_speech,
            HeaderMatch::NoMatch => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderMatch {
    /// `## N5`
    Level(String),
    /// `### Nouns` or `### Nouns (position)`
    PartOfSpeech(String),
    NoMatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_apply_keeps_other_heading() {
        let mut context = ParseContext::new();
        context.apply(HeaderMatch::Level("N5".to_string()));
        context.apply(HeaderMatch::PartOfSpeech("Nouns".to_string()));
        context.apply(HeaderMatch::Level("N4".to_string()));

        assert_eq!(context.level, "N4");
        assert_eq!(context.part_of_speech, "Nouns");
    }

    #[test]
    fn test_context_apply_no_match() {
        let mut context = ParseContext {
            level: "N3".to_string(),
            part_of_speech: "Verbs".to_string(),
        };
        context.apply(HeaderMatch::NoMatch);

        assert_eq!(context.labels(), vec!["N3", "Verbs"]);
    }

    #[test]
    fn test_entry_labels_are_a_snapshot() {
        let mut context = ParseContext {
            level: "N5".to_string(),
            part_of_speech: "Adverbs".to_string(),
        };
        let entry = VocabularyEntry::new(
            String::new(),
            "でも".to_string(),
            vec!["but".to_string()],
            &context,
        );
        context.apply(HeaderMatch::Level("N1".to_string()));

        assert_eq!(entry.labels, vec!["N5", "Adverbs"]);
    }

    #[test]
    fn test_entry_key() {
        let context = ParseContext::new();
        let kanji = VocabularyEntry::new("階".into(), "かい".into(), vec!["floor".into()], &context);
        let kana = VocabularyEntry::new(String::new(), "でも".into(), vec!["but".into()], &context);

        assert_eq!(kanji.key(), "階");
        assert_eq!(kana.key(), "でも");
    }

    #[test]
    fn test_entry_serializes_field_names() {
        let entry = VocabularyEntry::new(
            "先生".into(),
            "せんせい".into(),
            vec!["teacher".into(), "master".into()],
            &ParseContext::new(),
        );
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["kanji"], "先生");
        assert_eq!(value["english"][1], "master");
        assert_eq!(value["labels"][0], "");
    }
}
