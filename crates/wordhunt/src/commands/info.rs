//! `info`: package details and the configuration in effect.

use std::fmt::Display;

use camino::Utf8Path;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};
use wordhunt_core::config::{Config, ConfigFile, ConfigSources, LogLevel};
use wordhunt_core::{CountMode, SegmenterKind};

/// Arguments for the `info` subcommand. Output format follows `--json`.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct Info<'a> {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    license: &'static str,
    repository: &'static str,
    config: Effective<'a>,
}

/// The merged configuration plus where it came from.
#[derive(Serialize)]
struct Effective<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<&'a Utf8Path>,
    #[serde(skip_serializing_if = "no_files")]
    sources: &'a [ConfigFile],
    log_level: &'a LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<&'a Utf8Path>,
    segmenter: SegmenterKind,
    count_mode: CountMode,
    /// `None` when the limit is disabled.
    max_input_bytes: Option<usize>,
}

impl<'a> Info<'a> {
    fn new(config: &'a Config, sources: &'a ConfigSources) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            config: Effective {
                config_file: sources.primary_file(),
                sources: sources.files(),
                log_level: &config.log_level,
                log_dir: config.log_dir.as_deref(),
                segmenter: config.segmenter,
                count_mode: config.count_mode,
                max_input_bytes: config.input_limit(),
            },
        }
    }
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json = global_json))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!("executing info command");
    let info = Info::new(config, sources);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        info.name.if_supports_color(Stream::Stdout, |t| t.bold()),
        info.version.if_supports_color(Stream::Stdout, |t| t.green())
    );
    println!("{}", info.description);
    field("License", info.license);
    field("Repository", info.repository);

    let effective = &info.config;
    println!();
    println!(
        "{}",
        "Configuration".if_supports_color(Stream::Stdout, |t| t.bold())
    );
    match effective.config_file {
        Some(path) => field("Config file", path),
        None => field("Config file", "none (defaults)"),
    }
    field("Log level", effective.log_level.as_str());
    if let Some(dir) = effective.log_dir {
        field("Log directory", dir);
    }
    field("Segmenter", effective.segmenter);
    field("Count mode", effective.count_mode);
    match effective.max_input_bytes {
        Some(max) => field("Input limit", format!("{max} bytes")),
        None => field("Input limit", "disabled"),
    }

    Ok(())
}

fn no_files(files: &&[ConfigFile]) -> bool {
    files.is_empty()
}

fn field(label: &str, value: impl Display) {
    println!(
        "{:>14}: {value}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}
