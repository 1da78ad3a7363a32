//! Summary command implementation.
//!
//! The `site-readiness summary` command prints a short readiness status.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::SummaryArgs;
use crate::error::Result;
use crate::evaluator;
use crate::report::{JsonFormatter, ReportFormatter, SummaryFormatter};
use crate::site::Site;

use super::dispatcher::{Command, CommandResult};

/// The summary command implementation.
pub struct SummaryCommand {
    site_path: PathBuf,
    args: SummaryArgs,
    use_color: bool,
}

impl SummaryCommand {
    /// Create a new summary command.
    pub fn new(site_path: &Path, args: SummaryArgs, use_color: bool) -> Self {
        Self {
            site_path: site_path.to_path_buf(),
            args,
            use_color,
        }
    }
}

impl Command for SummaryCommand {
    fn execute(&self, mut out: &mut dyn Write) -> Result<CommandResult> {
        let site = Site::load(&self.site_path)?;
        let evaluation = evaluator::run(&site);

        if self.args.json {
            JsonFormatter::summary().format(&evaluation, &mut out)?;
        } else {
            SummaryFormatter::new(self.use_color).format(&evaluation, &mut out)?;
        }

        Ok(CommandResult::success())
    }
}
