//! `sentences`: how a file is split into sentences and words.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use wordhunt_core::{Config, Segmenter, SegmenterKind, input};

/// Arguments for the `sentences` subcommand.
#[derive(Args, Debug)]
pub struct SentencesArgs {
    /// File to segment.
    pub file: Utf8PathBuf,

    /// Also list the word tokens of each sentence.
    #[arg(long)]
    pub words: bool,

    /// Segmentation strategy (overrides config).
    #[arg(long, value_enum)]
    pub segmenter: Option<SegmenterKind>,
}

#[derive(Debug, Serialize)]
struct SegmentedSentence {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<Vec<String>>,
}

fn segment(segmenter: &dyn Segmenter, text: &str, with_words: bool) -> Vec<SegmentedSentence> {
    segmenter
        .split_sentences(text)
        .into_iter()
        .map(|sentence| SegmentedSentence {
            words: with_words.then(|| segmenter.split_words(&sentence)),
            text: sentence,
        })
        .collect()
}

/// Print the sentences (and optionally the words) of a file.
#[instrument(name = "cmd_sentences", skip_all, fields(file = %args.file))]
pub fn cmd_sentences(args: SentencesArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let kind = args.segmenter.unwrap_or(config.segmenter);
    debug!(segmenter = %kind, words = args.words, "executing sentences command");

    let text = input::read_text(&args.file, config.input_limit())
        .with_context(|| format!("failed to read {}", args.file))?;
    let segmenter = kind.build();
    let sentences = segment(segmenter.as_ref(), &text, args.words);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&sentences)?);
        return Ok(());
    }

    for (idx, sentence) in sentences.iter().enumerate() {
        let number = format!("{:>4}", idx + 1);
        println!(
            "{} {}",
            number.if_supports_color(Stream::Stdout, |n| n.dimmed()),
            sentence.text
        );
        if let Some(ref words) = sentence.words {
            println!(
                "     {} {}",
                "words:".if_supports_color(Stream::Stdout, |w| w.cyan()),
                words.join(" | ")
            );
        }
    }

    Ok(())
}
