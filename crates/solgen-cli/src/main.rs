//! solgen CLI
//!
//! Loads a build description and prints what generators would see: resolved
//! configurations, project dependencies, virtual file paths and the source
//! tree.

mod cli;
mod commands;
mod error;

use std::io::{self, Write};

use clap::Parser;
use colored::Colorize;
use solgen_core::{Action, BlockBaker, Context};
use solgen_fs::NormalizedPath;
use solgen_meta::DescriptionLoader;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let path = NormalizedPath::new(&cli.file);
    if !path.is_file() {
        return Err(CliError::user(format!(
            "Description file not found: {}",
            path.as_str()
        )));
    }
    let registry = DescriptionLoader::new().load(&path)?;

    let baker = BlockBaker::new();
    let mut ctx = Context::new(&registry, &baker).with_action(Action::builtin(&cli.action));
    if let Some(os) = cli.os {
        ctx = ctx.with_host(os);
    }
    tracing::debug!(?ctx, "Context ready");

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Projects => commands::run_projects(&registry, &mut out)?,
        Commands::Configs { project, json } => {
            commands::run_configs(&ctx, &project, json, &mut out)?
        }
        Commands::Deps {
            project,
            transitive,
        } => commands::run_deps(&ctx, &project, transitive, &mut out)?,
        Commands::Files { project } => commands::run_files(&ctx, &project, &mut out)?,
        Commands::Tree { project } => commands::run_tree(&ctx, &project, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
