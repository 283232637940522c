//! Vocabulary bullet extraction.
//!
//! A vocabulary line looks like `- 階 (かい) - floor / storey`. The Japanese
//! field is a run of characters outside the ASCII word class (kana, kanji,
//! spaces and punctuation), so ASCII prose bullets such as links never match.
//! Everything after the first ` - ` that follows it is the English field.

use kotoba_types::{ParseContext, VocabularyEntry};
use once_cell::sync::Lazy;
use regex::Regex;

static POINT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"- (?P<japanese>[^0-9A-Za-z_]+) - (?P<english>.*)").expect("point pattern")
});

/// `漢字 (かんじ)`
static READING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<kanji>[^0-9A-Za-z_]+) \((?P<kana>[^0-9A-Za-z_]+)\)").expect("reading pattern")
});

/// The two raw fields of a vocabulary bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point<'a> {
    pub japanese: &'a str,
    pub english: &'a str,
}

/// Match the bullet shape. The Japanese field comes back trimmed; a field
/// that is blank once trimmed is treated as no match.
pub fn match_point(line: &str) -> Option<Point<'_>> {
    let caps = POINT_REGEX.captures(line)?;
    let japanese = caps.name("japanese")?.as_str().trim();
    if japanese.is_empty() {
        return None;
    }

    Some(Point {
        japanese,
        english: caps.name("english").map_or("", |m| m.as_str()),
    })
}

/// Split a Japanese field into `(kanji, kana)`.
///
/// Without a parenthesised reading the whole field is taken as kana.
pub fn split_reading(japanese: &str) -> (String, String) {
    if let Some(caps) = READING_REGEX.captures(japanese) {
        let kanji = caps["kanji"].trim();
        let kana = caps["kana"].trim();
        if !kanji.is_empty() || !kana.is_empty() {
            return (kanji.to_string(), kana.to_string());
        }
    }

    (String::new(), japanese.to_string())
}

/// Split an English field on `/`, trimming every gloss. Empty glosses stay.
pub fn split_glosses(english: &str) -> Vec<String> {
    english.split('/').map(|gloss| gloss.trim().to_string()).collect()
}

/// Extract an entry from a vocabulary bullet, labelled with the current context
pub fn extract_entry(line: &str, context: &ParseContext) -> Option<VocabularyEntry> {
    let point = match_point(line)?;
    let (kanji, kana) = split_reading(point.japanese);

    Some(VocabularyEntry::new(
        kanji,
        kana,
        split_glosses(point.english),
        context,
    ))
}
