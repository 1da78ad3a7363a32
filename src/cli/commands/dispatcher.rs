//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ReportArgs};
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination for the command's standard output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    site_path: PathBuf,
    use_color: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given site snapshot.
    pub fn new(site_path: PathBuf, use_color: bool) -> Self {
        Self {
            site_path,
            use_color,
        }
    }

    /// Get the site snapshot path.
    pub fn site_path(&self) -> &Path {
        &self.site_path
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Report(args)) => {
                let cmd =
                    super::report::ReportCommand::new(&self.site_path, args.clone(), self.use_color);
                cmd.execute(out)
            }
            Some(Commands::Summary(args)) => {
                let cmd = super::summary::SummaryCommand::new(
                    &self.site_path,
                    args.clone(),
                    self.use_color,
                );
                cmd.execute(out)
            }
            Some(Commands::Export(args)) => {
                let cmd = super::export::ExportCommand::new(&self.site_path, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Import(args)) => {
                let cmd = super::import::ImportCommand::new(&self.site_path, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Options) => {
                let cmd = super::options::OptionsCommand::new(&self.site_path);
                cmd.execute(out)
            }
            None => {
                // Default to the full report
                let cmd = super::report::ReportCommand::new(
                    &self.site_path,
                    ReportArgs::default(),
                    self.use_color,
                );
                cmd.execute(out)
            }
        }
    }
}
