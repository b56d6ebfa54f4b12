//! Argument parsing and commands for the `wordhunt` binary.
//!
//! The parser lives in a library so that `xtask` can render man pages and
//! shell completions from [`command()`] and tests can drive the commands
//! directly. `main.rs` only wires config, logging and dispatch together.

pub mod commands;

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

/// When to color terminal output.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal that supports it.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorChoice {
    /// Force colors on or off for the rest of the process. `Auto` leaves
    /// detection to `owo-colors`.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                  Log filter (e.g. debug, wordhunt_core=trace)
    WORDHUNT_LOG_PATH         Write JSONL logs to this file
    WORDHUNT_LOG_DIR          Write JSONL logs to wordhunt.jsonl in this directory
    WORDHUNT_SEGMENTER        boundary | regex
    WORDHUNT_COUNT_MODE       occurrences | sentences
    WORDHUNT_MAX_INPUT_BYTES  Largest file to read
";

/// Find the sentences of a text file that contain a word.
#[derive(Parser)]
#[command(name = "wordhunt", version, about, long_about = None)]
#[command(arg_required_else_help = true, after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print just the version number
    #[arg(long)]
    pub version_only: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options accepted before or after any subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Load this config file on top of the discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before doing anything else
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// When to color output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the sentences that contain a word and how often it occurs
    Find(commands::find::FindArgs),

    /// Print the sentences (and optionally words) a file is split into
    Sentences(commands::sentences::SentencesArgs),

    /// Print package details and the effective configuration
    Info(commands::info::InfoArgs),
}

/// The clap command, for man pages and shell completions.
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["wordhunt", "info", "--json", "-vv", "--color", "never"]);
        assert!(cli.global.json);
        assert_eq!(cli.global.verbose, 2);
        assert!(matches!(cli.global.color, ColorChoice::Never));
        assert!(matches!(cli.command, Some(Commands::Info(_))));
    }

    #[test]
    fn find_takes_file_and_word() {
        let cli = Cli::parse_from(["wordhunt", "find", "notes.txt", "word", "--count", "sentences"]);
        let Some(Commands::Find(args)) = cli.command else {
            panic!("expected find");
        };
        assert_eq!(args.file, "notes.txt");
        assert_eq!(args.word, "word");
        assert!(args.count.is_some());
    }
}
