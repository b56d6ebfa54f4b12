//! Sentence and word segmentation.
//!
//! Two interchangeable strategies implement [`Segmenter`]:
//!
//! - [`BoundarySegmenter`] (default) follows Unicode Standard Annex #29,
//!   corrected for wrapped lines and abbreviations. Decimal numbers
//!   ("3.14"), lowercase continuations ("etc. and", `"Word!" to me`),
//!   titles ("Mr. Smith") and contractions ("don't") stay intact, and the
//!   rules are identical for every script and locale.
//! - [`RegexSegmenter`] splits on terminal punctuation followed by
//!   whitespace and on runs of non-letters. Kept for comparison with the
//!   boundary rules; it breaks on every period.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::abbreviations::ends_with_abbreviation;

/// Terminal punctuation run followed by whitespace or end of text.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|\z)").expect("valid regex"));

/// Anything that is not a letter.
static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\P{L}+").expect("valid regex"));

/// Splits text into sentences and sentences into word tokens.
///
/// Implementations must be deterministic: the same input always yields
/// the same output, regardless of platform or locale settings.
pub trait Segmenter: Send + Sync {
    /// Split `text` into trimmed, non-empty sentences in source order.
    fn split_sentences(&self, text: &str) -> Vec<String>;

    /// Split `text` into word tokens, dropping punctuation and whitespace.
    fn split_words(&self, text: &str) -> Vec<String>;
}

/// UAX #29 sentence and word boundaries.
///
/// UAX #29 breaks after every line break and knows no abbreviations, so
/// its sentence segments are joined again where no sentence ends: when the
/// segment has no `.`, `!` or `?` before its closing quotes and brackets
/// (a wrapped line), when the next segment starts lowercase
/// (`"Word!" to me`), or when the period belongs to an abbreviation or an
/// initial (`Mr. Smith`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundarySegmenter;

impl Segmenter for BoundarySegmenter {
    #[tracing::instrument(name = "boundary_sentences", skip_all, fields(text_len = text.len()))]
    fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut end = 0;
        let mut segments = text.split_sentence_bounds().peekable();

        while let Some(segment) = segments.next() {
            end += segment.len();
            let ends = match segments.peek() {
                Some(next) => ends_sentence(&text[start..end], next),
                None => true,
            };
            if ends {
                push_trimmed(&mut sentences, &text[start..end]);
                start = end;
            }
        }

        sentences
    }

    fn split_words(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}

/// Closing quotes and brackets that may follow terminal punctuation.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201D}', '\u{2019}', '\u{00BB}'];

/// Whether `candidate` is a whole sentence, given the segment after it.
fn ends_sentence(candidate: &str, next: &str) -> bool {
    let body = candidate.trim_end().trim_end_matches(CLOSERS);
    let Some(last) = body.chars().next_back() else {
        return false;
    };
    if !matches!(last, '.' | '!' | '?') {
        return false;
    }
    if next.trim_start().chars().next().is_some_and(char::is_lowercase) {
        return false;
    }
    !(last == '.' && ends_with_abbreviation(body))
}

/// Legacy punctuation-and-letters splitting.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexSegmenter;

impl Segmenter for RegexSegmenter {
    #[tracing::instrument(name = "regex_sentences", skip_all, fields(text_len = text.len()))]
    fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for end in SENTENCE_END.find_iter(text) {
            push_trimmed(&mut sentences, &text[start..end.end()]);
            start = end.end();
        }
        push_trimmed(&mut sentences, &text[start..]);

        sentences
    }

    fn split_words(&self, text: &str) -> Vec<String> {
        NON_LETTERS
            .split(text)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let sentence = fragment.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

/// Which segmentation strategy to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SegmenterKind {
    /// Unicode (UAX #29) sentence and word boundaries.
    #[default]
    Boundary,
    /// Split on terminal punctuation and non-letter runs.
    Regex,
}

impl SegmenterKind {
    /// Returns the strategy name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boundary => "boundary",
            Self::Regex => "regex",
        }
    }

    /// Construct the strategy.
    pub fn build(self) -> Box<dyn Segmenter> {
        match self {
            Self::Boundary => Box::new(BoundarySegmenter),
            Self::Regex => Box::new(RegexSegmenter),
        }
    }
}

impl std::fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
