//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Site Readiness - audit a site's configuration against a list of checks.
#[derive(Debug, Parser)]
#[command(name = "site-readiness")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the site snapshot (JSON, or YAML with a .yml/.yaml extension)
    #[arg(
        short,
        long,
        global = true,
        env = "SITE_READINESS_SITE",
        default_value = "site.json"
    )]
    pub site: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate all checks and show the full report (default)
    Report(ReportArgs),

    /// Show a short readiness summary
    Summary(SummaryArgs),

    /// Export the configured checks as a JSON array
    Export(ExportArgs),

    /// Replace the configured checks with a JSON array from a file
    Import(ImportArgs),

    /// List the names of all settings in the site, sorted
    Options,
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero on recommended failures too, not only critical ones
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `summary` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// JSON file holding an array of checks
    pub file: PathBuf,
}
