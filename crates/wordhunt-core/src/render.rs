//! Plain-text rendering of a [`Report`].
//!
//! Output is written to any [`io::Write`], so callers choose the
//! destination (stdout, a file, a buffer in tests).

use std::io;

use serde::{Deserialize, Serialize};

use crate::report::Report;

/// Which count the header line reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CountMode {
    /// Total occurrences of the word.
    #[default]
    Occurrences,
    /// Number of sentences containing the word.
    Sentences,
}

impl CountMode {
    /// Returns the mode name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Occurrences => "occurrences",
            Self::Sentences => "sentences",
        }
    }

    /// Pick the matching count out of `report`.
    pub const fn count(&self, report: &Report) -> usize {
        match self {
            Self::Occurrences => report.word_count(),
            Self::Sentences => report.sentence_count(),
        }
    }

    const fn label(&self) -> &'static str {
        match self {
            Self::Occurrences => "Occurrences of",
            Self::Sentences => "Sentences containing",
        }
    }
}

impl std::fmt::Display for CountMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write `report` as text.
///
/// The header always appears. The sentence list follows only when the
/// reported count is non-zero.
pub fn render<W: io::Write>(report: &Report, mode: CountMode, out: &mut W) -> io::Result<()> {
    let count = mode.count(report);
    writeln!(out, "{} \"{}\": {count}", mode.label(), report.word())?;

    if count == 0 {
        writeln!(out, "No sentences contain \"{}\".", report.word())?;
        return Ok(());
    }

    writeln!(out, "Sentences:")?;
    for sentence in report.matched_sentences() {
        writeln!(out, " - {sentence}")?;
    }
    Ok(())
}

/// Render `report` into a `String`.
pub fn render_to_string(report: &Report, mode: CountMode) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render(report, mode, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
