//! Report command implementation.
//!
//! The `site-readiness report` command evaluates every configured check and
//! prints the full readiness report.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ReportArgs;
use crate::error::Result;
use crate::evaluator::{self, Evaluation};
use crate::report::{HumanFormatter, JsonFormatter, ReportFormatter};
use crate::site::Site;

use super::dispatcher::{Command, CommandResult};

/// The report command implementation.
pub struct ReportCommand {
    site_path: PathBuf,
    args: ReportArgs,
    use_color: bool,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(site_path: &Path, args: ReportArgs, use_color: bool) -> Self {
        Self {
            site_path: site_path.to_path_buf(),
            args,
            use_color,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ReportArgs {
        &self.args
    }

    /// Exit code for an evaluation: critical failures always fail, recommended
    /// failures only in strict mode.
    fn exit_code(&self, evaluation: &Evaluation) -> i32 {
        let readiness = &evaluation.readiness;
        if readiness.has_critical() || (self.args.strict && readiness.failed_count() > 0) {
            1
        } else {
            0
        }
    }
}

impl Command for ReportCommand {
    fn execute(&self, mut out: &mut dyn Write) -> Result<CommandResult> {
        let site = Site::load(&self.site_path)?;
        let evaluation = evaluator::run(&site);

        if self.args.json {
            JsonFormatter::new().format(&evaluation, &mut out)?;
        } else {
            HumanFormatter::new(self.use_color).format(&evaluation, &mut out)?;
        }

        match self.exit_code(&evaluation) {
            0 => Ok(CommandResult::success()),
            code => Ok(CommandResult::failure(code)),
        }
    }
}
