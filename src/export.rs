use anyhow::{Context, Result};
use console::style;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::frequency::FrequencyTable;

/// The file written for `--output NAME`: always `NAME.json`.
pub fn json_path(output: &Path) -> PathBuf {
    let mut name = OsString::from(output.as_os_str());
    name.push(".json");
    PathBuf::from(name)
}

/// Write the table to a JSON file as a `{"token": count}` object.
pub fn export_json(table: &FrequencyTable, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, table).context("Failed to write JSON")?;
    writer
        .flush()
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

/// Render the table for the terminal, one `token  count` line per entry.
pub fn render_table(table: &FrequencyTable) -> String {
    if table.is_empty() {
        return format!("{}\n", style("No keywords found").yellow());
    }

    let width = table
        .iter()
        .map(|(token, _)| token.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (token, count) in table.iter() {
        let padding = " ".repeat(width - token.chars().count());
        out.push_str(&format!(
            "{}{}  {}\n",
            style(token).cyan(),
            padding,
            style(count).green().bold()
        ));
    }
    out
}
