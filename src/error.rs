use std::path::PathBuf;

use thiserror::Error;

/// Failures of the extraction, filtering and counting pipeline.
///
/// Every variant is terminal for the current invocation.
#[derive(Error, Debug)]
pub enum FrequentError {
    #[error("cannot read input file {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("access denied to {}: {reason}", path.display())]
    AccessDenied { path: PathBuf, reason: String },

    #[error("invalid page selection '{input}': {reason}")]
    InvalidPage { input: String, reason: String },

    #[error("no stopword list available for language '{language}' (available: {available})")]
    UnsupportedLanguage { language: String, available: String },

    #[error("invalid result limit {0}: the number of words must not be negative")]
    InvalidLimit(i64),

    #[error("failed to parse PDF {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("failed to extract text from page {page}: {message}")]
    Extraction { page: u32, message: String },
}

impl FrequentError {
    pub(crate) fn invalid_page(input: &str, reason: impl Into<String>) -> Self {
        FrequentError::InvalidPage {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
