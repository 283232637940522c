use kotoba_types::HeaderMatch;
use once_cell::sync::Lazy;
use regex::Regex;

/// `## N5`: exactly two markers, a space and an ASCII word run
static LEVEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^## (?P<level>[0-9A-Za-z_]+)").expect("level pattern"));

/// `### Nouns` or `### Nouns (position)`: exactly three markers. The
/// parenthetical may hold anything, kana included.
static PART_OF_SPEECH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^### (?P<part_of_speech>[0-9A-Za-z_]+ \(.*\)|[0-9A-Za-z_]+)")
        .expect("part of speech pattern")
});

/// Decide whether a line opens a new level or part of speech section
pub fn classify(line: &str) -> HeaderMatch {
    if let Some(caps) = LEVEL_REGEX.captures(line) {
        return HeaderMatch::Level(caps["level"].to_string());
    }

    if let Some(caps) = PART_OF_SPEECH_REGEX.captures(line) {
        return HeaderMatch::PartOfSpeech(caps["part_of_speech"].to_string());
    }

    HeaderMatch::NoMatch
}
