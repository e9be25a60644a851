pub mod report;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "frequent")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Read PDF pages in sequence, extract their text and report the most frequent words",
    long_about = None
)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Input PDF file
    #[arg(value_name = "INFILE")]
    pub infile: PathBuf,

    /// Comma-separated page numbers to extract, starting at one (default: all pages)
    #[arg(short = 'p', long = "pagenos", value_name = "PAGES")]
    pub pagenos: Option<String>,

    /// Stopwords to ignore instead of the language list (comma-separated)
    #[arg(short = 's', long = "stop-words", value_name = "WORDS", value_delimiter = ',')]
    pub stop_words: Vec<String>,

    /// Language of the stopwords to ignore (default: english)
    #[arg(short = 'l', long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Punctuation to ignore instead of ASCII punctuation; every character is one mark
    #[arg(long = "punctuations", visible_alias = "punct", value_name = "CHARS")]
    pub punctuations: Option<String>,

    /// Number of most frequent words to return (default: all words)
    #[arg(
        short = 'n',
        long = "number",
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub number: Option<i64>,

    /// User or owner password of an encrypted PDF
    #[arg(short = 'P', long)]
    pub password: Option<String>,

    /// Write the result as JSON to <OUTPUT>.json instead of printing it
    #[arg(short = 'o', long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Configuration file (default: <config dir>/frequent/config.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl Cli {
    /// Custom punctuation marks, one per character of `--punctuations`.
    pub fn punctuation_marks(&self) -> Option<Vec<String>> {
        self.punctuations
            .as_ref()
            .map(|chars| chars.chars().map(String::from).collect())
    }
}
