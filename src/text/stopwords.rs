use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::error::FrequentError;

/// Built-in stopword lists (NLTK stopword corpus), one word per line.
const LISTS: &[(&str, &str)] = &[
    ("danish", include_str!("stopwords/danish.txt")),
    ("dutch", include_str!("stopwords/dutch.txt")),
    ("english", include_str!("stopwords/english.txt")),
    ("finnish", include_str!("stopwords/finnish.txt")),
    ("french", include_str!("stopwords/french.txt")),
    ("german", include_str!("stopwords/german.txt")),
    ("italian", include_str!("stopwords/italian.txt")),
    ("norwegian", include_str!("stopwords/norwegian.txt")),
    ("portuguese", include_str!("stopwords/portuguese.txt")),
    ("spanish", include_str!("stopwords/spanish.txt")),
    ("swedish", include_str!("stopwords/swedish.txt")),
];

static STOPWORDS: Lazy<HashMap<&'static str, HashSet<&'static str>>> = Lazy::new(|| {
    LISTS
        .iter()
        .map(|(language, raw)| {
            let words = raw
                .lines()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .collect();
            (*language, words)
        })
        .collect()
});

/// Names of the languages with a built-in list, alphabetically.
pub fn available_languages() -> Vec<&'static str> {
    LISTS.iter().map(|(language, _)| *language).collect()
}

/// The stopword list for `language` (case-insensitive, e.g. `"English"`).
pub fn for_language(language: &str) -> Result<&'static HashSet<&'static str>, FrequentError> {
    let key = language.trim().to_lowercase();
    STOPWORDS
        .get(key.as_str())
        .ok_or_else(|| FrequentError::UnsupportedLanguage {
            language: language.to_string(),
            available: available_languages().join(", "),
        })
}
