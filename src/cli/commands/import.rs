//! Import command implementation.
//!
//! The `site-readiness import` command replaces the configured checks with
//! a JSON array read from a file. The site file is only written after the
//! payload has been validated.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ImportArgs;
use crate::editor::CheckEditor;
use crate::error::{ReadinessError, Result};
use crate::evaluator::load_checks;
use crate::site::Site;

use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand {
    site_path: PathBuf,
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(site_path: &Path, args: ImportArgs) -> Self {
        Self {
            site_path: site_path.to_path_buf(),
            args,
        }
    }
}

impl Command for ImportCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let payload = String::from_utf8(fs::read(&self.args.file)?).map_err(|e| {
            ReadinessError::ImportFormat {
                message: format!("not valid UTF-8 ({})", e),
            }
        })?;
        let mut site = Site::load(&self.site_path)?;

        let mut editor = CheckEditor::from_store(&site);
        let imported = editor.import_json(&payload)?;
        editor.save(&mut site)?;
        site.save(&self.site_path)?;

        let saved = load_checks(&site).len();
        writeln!(out, "Imported {} check(s), {} saved", imported, saved)?;
        if saved < imported {
            writeln!(
                out,
                "{} check(s) without a name were dropped",
                imported - saved
            )?;
        }

        Ok(CommandResult::success())
    }
}
