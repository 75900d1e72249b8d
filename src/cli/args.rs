//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// ift - Templates embedded in source files, materialized on disk.
#[derive(Debug, Parser)]
#[command(name = "ift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default config/ift.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// List every file touched
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print only results and warnings (repeat to print only errors)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the templates embedded in a source file
    Build(BuildArgs),

    /// Print one embedded template, or list their names
    Extract(ExtractArgs),

    /// Remove the generated files of one owner
    Gc(GcArgs),

    /// Show the generated-file cache
    List(ListArgs),

    /// Remove all generated template files
    ///
    /// Files are removed owner by owner, with owners in sorted order and
    /// each owner's files in recorded order.
    Clean(CleanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BuildArgs {
    /// Source file holding the templates after `__END__`
    pub source: PathBuf,

    /// Owner key recorded in the cache (e.g. the controller name)
    #[arg(short, long)]
    pub owner: String,

    /// Template directory relative to the view root (defaults to the owner)
    #[arg(long)]
    pub template_dir: Option<PathBuf>,

    /// Rebuild even if templates were already generated
    #[arg(long)]
    pub reload: bool,
}

/// Arguments for the `extract` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExtractArgs {
    /// Source file holding the templates after `__END__`
    pub source: PathBuf,

    /// Template to print; lists template names when omitted
    pub name: Option<String>,
}

/// Arguments for the `gc` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GcArgs {
    /// Owner whose generated files are removed
    pub owner: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `clean` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CleanArgs {
    /// Empty the cache after every listed file was removed
    #[arg(long)]
    pub prune: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
