//! wordhunt CLI
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::{Context, anyhow};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::debug;
use wordhunt::{Cli, Commands, commands};
use wordhunt_core::config::{Config, ConfigLoader, ConfigSources};

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.global.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help: without --version-only there is a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.global.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let (config, sources) = load_config(cli.global.config.as_deref())?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config.log_dir.clone().map(Utf8PathBuf::into_std_path_buf),
    );
    let filter = observability::env_filter(
        cli.global.quiet,
        cli.global.verbose,
        config.log_level.as_str(),
    );
    let _guard = observability::init_observability(&obs_config, filter)
        .context("failed to initialize logging")?;

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        json = cli.global.json,
        color = ?cli.global.color,
        config_file = ?sources.primary_file(),
        "CLI initialized"
    );

    let result = dispatch(command, cli.global.json, &config, &sources);
    if let Err(ref err) = result {
        tracing::error!(error = %err, "command failed");
    }
    result
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(utf8(cwd, "current directory")?);
    if let Some(path) = explicit {
        loader = loader.with_file(utf8(path.to_path_buf(), "config path")?);
    }
    loader.load().context("failed to load configuration")
}

fn dispatch(
    command: Commands,
    json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    match command {
        Commands::Find(args) => commands::find::cmd_find(args, json, config),
        Commands::Sentences(args) => commands::sentences::cmd_sentences(args, json, config),
        Commands::Info(args) => commands::info::cmd_info(args, json, config, sources),
    }
}

fn utf8(path: std::path::PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| anyhow!("{what} is not valid UTF-8: {}", path.display()))
}
