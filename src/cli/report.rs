use anyhow::Result;
use console::{Emoji, style};
use tracing::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::export;
use crate::frequency;
use crate::parser;
use crate::text::KeywordFilter;

static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");

/// Options after layering command-line flags over the configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pages: String,
    pub password: String,
    pub language: String,
    pub number: Option<i64>,
    pub stop_words: Vec<String>,
    pub punctuations: Vec<String>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        Self {
            pages: cli.pagenos.clone().unwrap_or_default(),
            password: cli.password.clone().unwrap_or_default(),
            language: cli.language.clone().unwrap_or(config.language),
            number: cli.number.or(config.number),
            stop_words: if cli.stop_words.is_empty() {
                config.stop_words
            } else {
                cli.stop_words.clone()
            },
            punctuations: cli.punctuation_marks().unwrap_or(config.punctuations),
        }
    }
}

/// Extract, filter and count, then print the table or save it as JSON.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, config);

    let filter = KeywordFilter::new(
        Some(&settings.stop_words),
        Some(&settings.punctuations),
        &settings.language,
    )?;

    let text = parser::extract(&cli.infile, &settings.password, &settings.pages)?;
    let keywords = filter.filter(&text);
    info!("Extracted {} keywords", keywords.len());

    let table = frequency::most_common(&keywords, settings.number)?;
    info!(
        "Reporting {} distinct words covering {} occurrences",
        table.len(),
        table.total()
    );

    match &cli.output {
        Some(output) => {
            let path = export::json_path(output);
            export::export_json(&table, &path)?;
            println!(
                "{}Saved {} words to {}",
                CHECK,
                style(table.len()).green().bold(),
                style(path.display()).cyan()
            );
        }
        None => print!("{}", export::render_table(&table)),
    }

    Ok(())
}
