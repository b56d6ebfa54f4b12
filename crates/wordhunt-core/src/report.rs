//! The result of one analysis.

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};

/// Sentences that contain a word, and how often the word occurs in them.
///
/// Built once per analysis by [`Report::new`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    word: String,
    word_count: usize,
    sentence_count: usize,
    matched_sentences: Vec<String>,
}

impl Report {
    /// Build a report.
    ///
    /// `word_count` is the total number of occurrences across all matched
    /// sentences. Every matched sentence holds at least one occurrence, so
    /// `word_count` below the number of sentences is rejected, as is any
    /// sentence that is empty after trimming.
    pub fn new(
        word: impl Into<String>,
        matched_sentences: Vec<String>,
        word_count: usize,
    ) -> AnalysisResult<Self> {
        if matched_sentences.iter().any(|s| s.trim().is_empty()) {
            return Err(AnalysisError::InvalidReport(
                "matched sentences must not be empty".to_string(),
            ));
        }
        if word_count < matched_sentences.len() {
            return Err(AnalysisError::InvalidReport(format!(
                "{word_count} occurrences cannot span {} sentences",
                matched_sentences.len()
            )));
        }

        Ok(Self {
            word: word.into(),
            word_count,
            sentence_count: matched_sentences.len(),
            matched_sentences,
        })
    }

    /// The word that was searched for, as given by the caller.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Total occurrences of the word.
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of sentences containing the word.
    pub const fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Matching sentences in source order.
    pub fn matched_sentences(&self) -> &[String] {
        &self.matched_sentences
    }

    /// `true` if the word was not found.
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
