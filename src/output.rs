//! Output formatting and persistence for analysis results.
//!
//! Supports the plain two-line report, JSON logging, and writing coerced
//! records back out as CSV.

use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::types::AnalysisSummary;
use crate::parser::Record;
use csv::WriterBuilder;
use std::path::Path;

/// Renders the stdout report: the category counts as a JSON object on the
/// first line and the min-ratio address on the second.
pub fn render_report(summary: &AnalysisSummary) -> Result<String> {
    let counts = serde_json::to_string(&summary.categories)?;
    Ok(format!("{}\n{}\n", counts, summary.min_ratio_address))
}

/// Logs the full summary as pretty-printed JSON.
pub fn print_json(summary: &AnalysisSummary) -> Result<()> {
    debug!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Writes `records` to a new CSV file at `path`, replacing any existing one.
///
/// Only the required columns are written, under the headers the loader
/// expects, so the file can be loaded again.
pub fn write_records(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(path = %path.display(), records = records.len(), "Records written");
    Ok(())
}
