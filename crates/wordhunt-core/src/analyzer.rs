//! Finding the sentences that contain a word.
//!
//! [`Analyzer::analyze`] runs the whole pipeline for a file: validate the
//! arguments, read the text, split it into sentences, count the word in
//! each sentence, and assemble a [`Report`]. Any failure ends the call;
//! no partial report is ever returned.
//!
//! Matching is whole-token and case-insensitive. Tokens come from the
//! configured [`Segmenter`], so punctuation next to a word ("word," or
//! "word?") is already gone by the time tokens are compared.

use std::io;

use camino::Utf8Path;

use crate::error::{AnalysisError, AnalysisResult, ArgumentError};
use crate::input::{self, DEFAULT_MAX_INPUT_BYTES};
use crate::render::{self, CountMode};
use crate::report::Report;
use crate::segment::{BoundarySegmenter, Segmenter};
use crate::sink;

/// Runs word searches with a fixed segmentation strategy.
///
/// Holds no mutable state; one analyzer can serve any number of calls,
/// including from several threads.
pub struct Analyzer {
    segmenter: Box<dyn Segmenter>,
    max_input_bytes: Option<usize>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("max_input_bytes", &self.max_input_bytes)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Analyzer using Unicode boundary segmentation and the default size limit.
    pub fn new() -> Self {
        Self::with_segmenter(Box::new(BoundarySegmenter))
    }

    /// Analyzer using the given segmentation strategy.
    pub fn with_segmenter(segmenter: Box<dyn Segmenter>) -> Self {
        Self {
            segmenter,
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
        }
    }

    /// Set the maximum input size. `None` removes the limit.
    #[must_use]
    pub const fn with_max_input_bytes(mut self, max: Option<usize>) -> Self {
        self.max_input_bytes = max;
        self
    }

    /// Find the sentences of the file at `path` that contain `word`.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidArgument`] if `path` or `word` is empty,
    ///   or `path` does not exist. Nothing is read in that case.
    /// - [`AnalysisError::Io`] if the file cannot be checked or read.
    /// - [`AnalysisError::InputTooLarge`] if the file exceeds the limit.
    #[tracing::instrument(skip(self))]
    pub fn analyze(&self, path: &Utf8Path, word: &str) -> AnalysisResult<Report> {
        validate(path, word)?;
        let text = input::read_text(path, self.max_input_bytes)?;
        self.analyze_text(&text, word)
    }

    /// Find the sentences of `text` that contain `word`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidArgument`] if `word` is empty.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn analyze_text(&self, text: &str, word: &str) -> AnalysisResult<Report> {
        let word = validate_word(word)?;
        let needle = fold(word);

        let sentences = self.segmenter.split_sentences(text);
        tracing::debug!(sentences = sentences.len(), "segmented");

        let mut word_count = 0;
        let mut matched = Vec::new();
        for sentence in sentences {
            let count = self.count_folded(&sentence, &needle);
            if count > 0 {
                word_count += count;
                matched.push(sentence);
            }
        }

        tracing::debug!(word_count, matched = matched.len(), "counted");
        Report::new(word, matched, word_count)
    }

    /// Count the tokens of `sentence` equal to `word`, ignoring case.
    pub fn count_in_sentence(&self, sentence: &str, word: &str) -> usize {
        self.count_folded(sentence, &fold(word.trim()))
    }

    /// Analyze the file and write the rendered report to `out`.
    ///
    /// # Errors
    ///
    /// Everything [`analyze`](Self::analyze) returns, plus
    /// [`AnalysisError::Io`] if writing to `out` fails.
    pub fn analyze_and_render<W: io::Write>(
        &self,
        path: &Utf8Path,
        word: &str,
        mode: CountMode,
        out: &mut W,
    ) -> AnalysisResult<Report> {
        let report = self.analyze(path, word)?;
        render::render(&report, mode, out).map_err(|e| AnalysisError::io("<output>", e))?;
        Ok(report)
    }

    /// Analyze the file and append the report to the log at `log_path`.
    ///
    /// # Errors
    ///
    /// Everything [`analyze`](Self::analyze) returns, plus
    /// [`AnalysisError::Io`] if the log cannot be written.
    pub fn analyze_and_save_log(
        &self,
        path: &Utf8Path,
        log_path: &Utf8Path,
        word: &str,
    ) -> AnalysisResult<Report> {
        let report = self.analyze(path, word)?;
        sink::write_log(log_path, path, &report)?;
        Ok(report)
    }

    fn count_folded(&self, sentence: &str, needle: &str) -> usize {
        self.segmenter
            .split_words(sentence)
            .iter()
            .filter(|token| fold(token) == needle)
            .count()
    }
}

fn validate(path: &Utf8Path, word: &str) -> AnalysisResult<()> {
    if path.as_str().is_empty() {
        return Err(ArgumentError::EmptyPath.into());
    }
    validate_word(word)?;
    match path.as_std_path().try_exists() {
        Ok(true) => Ok(()),
        Ok(false) => Err(ArgumentError::MissingFile {
            path: path.to_path_buf(),
        }
        .into()),
        Err(e) => Err(AnalysisError::io(path, e)),
    }
}

fn validate_word(word: &str) -> Result<&str, ArgumentError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(ArgumentError::EmptyWord);
    }
    Ok(word)
}

/// Case-fold for comparison.
///
/// Upper-casing first maps characters such as `ß` to their multi-letter
/// forms, so "STRASSE" and "straße" compare equal.
fn fold(s: &str) -> String {
    s.to_uppercase().to_lowercase()
}
