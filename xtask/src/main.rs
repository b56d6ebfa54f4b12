//! Development tasks for the wordhunt workspace.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for wordhunt")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,

        /// Shells to generate for (defaults to all supported shells)
        #[arg(long, value_enum)]
        shell: Vec<Shell>,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => gen_man(&out),
        Task::Completions { out, shell } => gen_completions(&out, shell),
    }
}

fn gen_man(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let cmd = wordhunt::command();
    let name = cmd.get_name().to_string();
    write_page(out, &name, cmd.clone())?;

    for sub in cmd.get_subcommands() {
        let page = format!("{name}-{}", sub.get_name());
        let sub = sub.clone().name(page.clone());
        write_page(out, &page, sub)?;
    }

    println!("man pages written to {}", out.display());
    Ok(())
}

fn write_page(out: &Path, name: &str, cmd: clap::Command) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd)
        .render(&mut buf)
        .with_context(|| format!("failed to render man page for {name}"))?;
    let path = out.join(format!("{name}.1"));
    fs::write(&path, buf).with_context(|| format!("failed to write {}", path.display()))
}

fn gen_completions(out: &Path, shells: Vec<Shell>) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let shells = if shells.is_empty() {
        Shell::value_variants().to_vec()
    } else {
        shells
    };

    let mut cmd = wordhunt::command();
    let name = cmd.get_name().to_string();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, &name, out)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("{}", path.display());
    }
    Ok(())
}
