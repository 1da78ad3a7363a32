//! Options command implementation.
//!
//! The `site-readiness options` command lists every setting name in the
//! site, sorted, to help pick names when writing checks.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::site::Site;

use super::dispatcher::{Command, CommandResult};

/// The options command implementation.
pub struct OptionsCommand {
    site_path: PathBuf,
}

impl OptionsCommand {
    /// Create a new options command.
    pub fn new(site_path: &Path) -> Self {
        Self {
            site_path: site_path.to_path_buf(),
        }
    }
}

impl Command for OptionsCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let site = Site::load(&self.site_path)?;
        for name in site.option_names() {
            writeln!(out, "{}", name)?;
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_sorted_names() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        std::fs::write(&path, r#"{"options": {"zeta": 1, "alpha": "a"}}"#).unwrap();

        let mut output = Vec::new();
        OptionsCommand::new(&path).execute(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "alpha\nzeta\n");
    }
}
