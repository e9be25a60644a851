use indexmap::IndexMap;
use serde::Serialize;

use crate::error::FrequentError;

/// Token counts ordered from the most to the least frequent.
///
/// Serializes as a JSON object whose keys keep this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Count `tokens` and keep the `limit` most common ones.
///
/// Tokens are counted exactly as given. Equal counts keep the order in which
/// the tokens first appeared. `None` keeps every token and `Some(0)` keeps
/// none; a negative limit is rejected.
pub fn most_common(tokens: &[String], limit: Option<i64>) -> Result<FrequencyTable, FrequentError> {
    let limit = match limit {
        Some(n) if n < 0 => return Err(FrequentError::InvalidLimit(n)),
        Some(n) => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        None => None,
    };

    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }

    // Stable, so ties stay in first-appearance order.
    counts.sort_by(|_, a, _, b| b.cmp(a));

    if let Some(limit) = limit {
        counts.truncate(limit);
    }

    Ok(FrequencyTable { counts })
}
