use once_cell::sync::Lazy;
use regex::Regex;

/// JLPT level labels: `N5` down to `N1`
static LEVEL_LABEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^N\d").expect("level label pattern"));

pub fn is_level_label(label: &str) -> bool {
    LEVEL_LABEL_REGEX.is_match(label)
}

/// Sorted labels that are not JLPT levels
pub fn parts_of_speech<I>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut parts: Vec<String> = labels
        .into_iter()
        .filter(|label| !is_level_label(label))
        .collect();
    parts.sort();
    parts
}
