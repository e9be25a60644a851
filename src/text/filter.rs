use std::collections::HashSet;

use tracing::debug;

use super::stopwords;
use super::tokenizer::tokenize;
use crate::error::FrequentError;

/// Keeps the content-bearing tokens of a text.
///
/// A token survives when its lowercase form is not a stopword and the token
/// itself is not one of the punctuation marks. Punctuation is matched
/// exactly: `.` is dropped, `...` and `mat.` are not.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    stop_words: HashSet<String>,
    punctuations: HashSet<String>,
}

impl KeywordFilter {
    /// Build a filter.
    ///
    /// A `stop_words` list with at least one non-blank entry replaces the
    /// built-in list for `language`; blank entries are ignored. A non-empty
    /// `punctuations` list replaces the ASCII punctuation set.
    /// The language is only looked up when its list is needed.
    pub fn new(
        stop_words: Option<&[String]>,
        punctuations: Option<&[String]>,
        language: &str,
    ) -> Result<Self, FrequentError> {
        let custom: HashSet<String> = stop_words
            .unwrap_or_default()
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();
        let stop_words = if custom.is_empty() {
            stopwords::for_language(language)?
                .iter()
                .map(|w| w.to_string())
                .collect()
        } else {
            custom
        };

        let punctuations: HashSet<String> = match punctuations {
            Some(marks) if !marks.is_empty() => marks.iter().cloned().collect(),
            _ => default_punctuation(),
        };

        Ok(Self {
            stop_words,
            punctuations,
        })
    }

    /// Tokenize `text` and return the surviving tokens, lowercased, in order.
    pub fn filter(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let tokens = tokenize(text);
        let total = tokens.len();
        let keywords: Vec<String> = tokens
            .into_iter()
            .filter_map(|token| {
                let lower = token.to_lowercase();
                if self.stop_words.contains(&lower) || self.punctuations.contains(&token) {
                    None
                } else {
                    Some(lower)
                }
            })
            .collect();

        debug!("Kept {} of {} tokens", keywords.len(), total);
        keywords
    }
}

/// The 32 ASCII punctuation characters, each as its own mark.
pub fn default_punctuation() -> HashSet<String> {
    (0u8..=127)
        .map(char::from)
        .filter(char::is_ascii_punctuation)
        .map(String::from)
        .collect()
}
