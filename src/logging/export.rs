//! Diagnostic export of the log history
//!
//! Writes a snapshot of the retained lines to a writer or to a timestamped
//! file, for attaching to bug reports.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

use super::store::LogStore;

/// Output format of an export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One line per entry
    #[default]
    Text,
    /// JSON array of lines
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "log",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the current history to `writer`
///
/// Returns the number of lines written.
pub fn write_history<W: Write>(
    store: &LogStore,
    format: ExportFormat,
    mut writer: W,
) -> Result<usize> {
    let lines = store.history();

    match format {
        ExportFormat::Text => {
            for line in &lines {
                writeln!(writer, "{}", line).context("Failed to write log line")?;
            }
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &lines)
                .context("Failed to serialize log history")?;
            writeln!(writer).context("Failed to write log history")?;
        }
    }

    writer.flush().context("Failed to flush log export")?;
    Ok(lines.len())
}

/// Generate a timestamped export file path
pub fn create_export_path(dir: &Path, format: ExportFormat) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    dir.join(format!("authlog-{}.{}", timestamp, format.extension()))
}

/// Export the current history into a new file under `dir`
///
/// Returns the path of the written file.
pub fn export_to_dir(store: &LogStore, dir: &Path, format: ExportFormat) -> Result<PathBuf> {
    fs::create_dir_all(dir).context("Failed to create export directory")?;

    let path = create_export_path(dir, format);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;

    let count = write_history(store, format, BufWriter::new(file))?;
    tracing::debug!("Exported {} log lines to {}", count, path.display());

    Ok(path)
}
