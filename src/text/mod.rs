//! Tokenization and stopword filtering.

mod filter;
mod stopwords;
mod tokenizer;

pub use filter::KeywordFilter;
