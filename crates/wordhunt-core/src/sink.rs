//! Log sink for analysis reports.
//!
//! Each call appends one JSON line to the log file:
//!
//! ```text
//! {"source":"notes.txt","report":{"word":"word","word_count":2,...}}
//! ```

use std::fs::OpenOptions;
use std::io::Write;

use camino::Utf8Path;
use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::report::Report;

#[derive(Serialize)]
struct LogEntry<'a> {
    source: &'a str,
    report: &'a Report,
}

/// Append `report` for the analysed file `source` to `log_path`.
///
/// The log file is created if it does not exist.
#[tracing::instrument(skip(report), fields(word = report.word(), word_count = report.word_count()))]
pub fn write_log(log_path: &Utf8Path, source: &Utf8Path, report: &Report) -> AnalysisResult<()> {
    let entry = LogEntry {
        source: source.as_str(),
        report,
    };
    let mut line = serde_json::to_string(&entry)
        .map_err(|e| AnalysisError::io(log_path, e.into()))?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| AnalysisError::io(log_path, e))?;
    file.write_all(line.as_bytes())
        .map_err(|e| AnalysisError::io(log_path, e))?;

    tracing::info!(log = %log_path, "report logged");
    Ok(())
}
