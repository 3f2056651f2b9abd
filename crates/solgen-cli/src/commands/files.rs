//! The files command

use std::io::Write;

use colored::Colorize;
use solgen_core::{Context, each_file};

use crate::error::Result;

/// Run the files command
pub fn run_files(ctx: &Context<'_>, name: &str, out: &mut impl Write) -> Result<()> {
    let project = ctx.registry().require_project(name)?;
    let files: Vec<_> = each_file(project.project()).collect();
    let width = files
        .iter()
        .map(|file| file.relpath().as_str().len())
        .max()
        .unwrap_or(0);

    for file in &files {
        writeln!(
            out,
            "{:<width$}  {}  {}",
            file.relpath().as_str(),
            "->".dimmed(),
            file.vpath()
        )?;
    }
    writeln!(out, "{} {} files", "Total:".dimmed(), files.len())?;
    Ok(())
}
