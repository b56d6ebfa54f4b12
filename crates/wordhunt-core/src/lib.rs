//! Core library for wordhunt.
//!
//! Finds the sentences of a text that contain a given word, matching whole
//! tokens without regard to case, and counts every occurrence.
//!
//! # Modules
//!
//! - [`segment`] - Sentence and word segmentation strategies
//! - [`abbreviations`] - Abbreviations that do not end a sentence
//! - [`analyzer`] - The search pipeline
//! - [`report`] - The immutable result of one search
//! - [`render`] - Plain-text output of a report
//! - [`sink`] - Appending reports to a JSONL log
//! - [`input`] - Reading input files
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordhunt_core::Analyzer;
//!
//! let report = Analyzer::new()
//!     .analyze_text("A word. Another WORD, and a word. Nothing here.", "word")
//!     .unwrap();
//!
//! assert_eq!(report.word_count(), 3);
//! assert_eq!(report.matched_sentences(), ["A word.", "Another WORD, and a word."]);
//! ```
#![deny(unsafe_code)]

pub mod abbreviations;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod report;
pub mod segment;
pub mod sink;

pub use analyzer::Analyzer;
pub use config::{Config, ConfigFile, ConfigLoader, ConfigOrigin, ConfigSources, LogLevel};
pub use error::{
    AnalysisError, AnalysisResult, ArgumentError, ConfigError, ConfigResult, IoFailureKind,
};
pub use input::DEFAULT_MAX_INPUT_BYTES;
pub use render::CountMode;
pub use report::Report;
pub use segment::{BoundarySegmenter, RegexSegmenter, Segmenter, SegmenterKind};
