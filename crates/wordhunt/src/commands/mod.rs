//! Command implementations.

use wordhunt_core::{Analyzer, SegmenterKind};

pub mod find;
pub mod info;
pub mod sentences;

/// Build an analyzer from the effective segmenter and input limit.
pub fn build_analyzer(segmenter: SegmenterKind, max_input_bytes: Option<usize>) -> Analyzer {
    Analyzer::with_segmenter(segmenter.build()).with_max_input_bytes(max_input_bytes)
}
