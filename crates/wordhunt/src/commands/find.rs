//! `find`: the sentences of a file that contain a word.

use std::io::Write;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use wordhunt_core::{Config, CountMode, SegmenterKind, sink};

use super::build_analyzer;

/// Arguments for the `find` subcommand.
#[derive(Args, Debug)]
pub struct FindArgs {
    /// File to search.
    pub file: Utf8PathBuf,

    /// Word to look for (whole word, case-insensitive).
    pub word: String,

    /// Segmentation strategy (overrides config).
    #[arg(long, value_enum)]
    pub segmenter: Option<SegmenterKind>,

    /// Count reported in the header line (overrides config).
    #[arg(long, value_enum)]
    pub count: Option<CountMode>,

    /// Also append the report to this JSONL log file.
    #[arg(long, value_name = "FILE")]
    pub log: Option<Utf8PathBuf>,
}

/// Search a file for a word and print the matching sentences.
#[instrument(name = "cmd_find", skip_all, fields(file = %args.file, word = %args.word))]
pub fn cmd_find(args: FindArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let segmenter = args.segmenter.unwrap_or(config.segmenter);
    let mode = args.count.unwrap_or(config.count_mode);
    debug!(%segmenter, %mode, log = ?args.log, "executing find command");

    let analyzer = build_analyzer(segmenter, config.input_limit());

    let report = if global_json {
        let report = analyzer
            .analyze(&args.file, &args.word)
            .with_context(|| format!("failed to search {}", args.file))?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        report
    } else {
        let mut stdout = std::io::stdout().lock();
        let report = analyzer
            .analyze_and_render(&args.file, &args.word, mode, &mut stdout)
            .with_context(|| format!("failed to search {}", args.file))?;
        stdout.flush()?;
        report
    };

    if let Some(ref log) = args.log {
        sink::write_log(log, &args.file, &report)
            .with_context(|| format!("failed to write log {log}"))?;
    }

    Ok(())
}
