//! Treebank-style word tokenizer.
//!
//! Words are separated from adjacent punctuation, English clitics are split
//! off (`don't` -> `do` `n't`), hyphenated words stay whole, and a period is
//! only split off the end of a word that is not an abbreviation.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Always tokens of their own: ellipses, double dashes, brackets and symbols.
static ALWAYS_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\.{2,}|--|[;@#$%&?!*()\[\]{}<>"]"#).unwrap());

/// `,` and `:` split unless a digit follows (`1,000`, `10:30`).
static COMMA_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"([:,])([^\d])").unwrap());
static TRAILING_COMMA_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"([:,])$").unwrap());

/// Words whose final period belongs to the word.
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "al", "approx", "corp", "dept", "dr", "etc", "fig", "inc", "jr", "ltd", "mr", "mrs",
        "ms", "prof", "sr", "st", "vol", "vs",
    ]
    .into_iter()
    .collect()
});

const CLITICS: [&str; 7] = ["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Words starting with an apostrophe that must keep it.
const LEADING_CLITICS: [&str; 9] = ["'s", "'m", "'d", "'t", "'n", "'re", "'ve", "'ll", "'ye"];

/// Fused forms and the byte offset they split at.
const FUSED: [(&str, usize); 8] = [
    ("cannot", 3),
    ("d'ye", 1),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("more'n", 4),
    ("wanna", 3),
];

const ARCHAIC: [&str; 2] = ["'tis", "'twas"];

/// Split `text` into word and punctuation tokens, preserving case.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{00AB}' | '\u{00BB}' => '"',
            c => c,
        })
        .collect();

    let spaced = ALWAYS_SPLIT.replace_all(&normalized, " $0 ");
    let spaced = COMMA_COLON.replace_all(&spaced, " $1 $2");
    let spaced = TRAILING_COMMA_COLON.replace_all(&spaced, " $1 ");

    let mut tokens = Vec::new();
    for word in spaced.split_whitespace() {
        split_word(word, &mut tokens);
    }
    tokens
}

fn split_word(word: &str, tokens: &mut Vec<String>) {
    let bare = word.strip_suffix('.').unwrap_or(word);
    if ARCHAIC.iter().any(|archaic| bare.eq_ignore_ascii_case(archaic)) {
        tokens.push(bare[..2].to_string());
        tokens.push(bare[2..].to_string());
        if bare.len() < word.len() {
            tokens.push(".".to_string());
        }
        return;
    }

    let mut word = word;
    while word.len() > 1 && word.starts_with('\'') && !is_leading_clitic(word) {
        tokens.push("'".to_string());
        word = &word[1..];
    }

    // Peeled off the end, so emitted in reverse.
    let mut tail: Vec<&str> = Vec::new();

    if let Some(stem) = word.strip_suffix('.') {
        if !stem.is_empty() && !stem.contains('.') && !is_abbreviation(stem) {
            tail.push(".");
            word = stem;
        }
    }

    while word.len() > 1 && word.ends_with('\'') {
        tail.push("'");
        word = &word[..word.len() - 1];
    }

    if let Some(at) = clitic_start(word) {
        tail.push(&word[at..]);
        word = &word[..at];
    }

    match fused_split(word) {
        Some(at) => {
            tokens.push(word[..at].to_string());
            tokens.push(word[at..].to_string());
        }
        None if !word.is_empty() => tokens.push(word.to_string()),
        None => {}
    }

    tokens.extend(tail.into_iter().rev().map(str::to_string));
}

fn is_leading_clitic(word: &str) -> bool {
    LEADING_CLITICS
        .iter()
        .any(|clitic| word.eq_ignore_ascii_case(clitic))
}

fn is_abbreviation(stem: &str) -> bool {
    ABBREVIATIONS.contains(stem.to_lowercase().as_str())
}

fn clitic_start(word: &str) -> Option<usize> {
    CLITICS.iter().find_map(|clitic| {
        let at = word.len().checked_sub(clitic.len())?;
        if at > 0 && word.is_char_boundary(at) && word[at..].eq_ignore_ascii_case(clitic) {
            Some(at)
        } else {
            None
        }
    })
}

fn fused_split(word: &str) -> Option<usize> {
    FUSED
        .iter()
        .find(|(fused, _)| word.eq_ignore_ascii_case(fused))
        .map(|(_, at)| *at)
}
