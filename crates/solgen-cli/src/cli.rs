//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use solgen_meta::OperatingSystem;

/// solgen - Inspect resolved build descriptions
#[derive(Parser, Debug)]
#[command(name = "solgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Description file (TOML, JSON or YAML)
    #[arg(
        short,
        long,
        global = true,
        env = "SOLGEN_FILE",
        default_value = "solgen.toml"
    )]
    pub file: PathBuf,

    /// Generator action to resolve for (vs2010, xcode4, gmake, ...)
    #[arg(short, long, global = true, default_value = "gmake")]
    pub action: String,

    /// Host operating system to fall back to (defaults to the running host)
    #[arg(long, global = true)]
    pub os: Option<OperatingSystem>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every solution and its projects
    Projects,

    /// Show each configuration of a project
    ///
    /// Examples:
    ///   solgen configs Engine
    ///   solgen --action vs2010 configs Engine --json
    Configs {
        /// Project name (case-insensitive)
        project: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the projects a project links to
    Deps {
        /// Project name (case-insensitive)
        project: String,

        /// Print the full build order, dependencies first
        #[arg(short, long)]
        transitive: bool,
    },

    /// Show each source file with its virtual path
    Files {
        /// Project name (case-insensitive)
        project: String,
    },

    /// Show the sorted source tree
    Tree {
        /// Project name (case-insensitive)
        project: String,
    },
}
