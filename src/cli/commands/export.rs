//! Export command implementation.
//!
//! The `site-readiness export` command writes the configured checks as a
//! JSON array that `import` accepts.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ExportArgs;
use crate::editor::CheckEditor;
use crate::error::Result;
use crate::site::Site;

use super::dispatcher::{Command, CommandResult};

/// The export command implementation.
pub struct ExportCommand {
    site_path: PathBuf,
    args: ExportArgs,
}

impl ExportCommand {
    /// Create a new export command.
    pub fn new(site_path: &Path, args: ExportArgs) -> Self {
        Self {
            site_path: site_path.to_path_buf(),
            args,
        }
    }
}

impl Command for ExportCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let site = Site::load(&self.site_path)?;
        let editor = CheckEditor::from_store(&site);
        let json = editor.export_json()?;

        match &self.args.output {
            Some(path) => {
                fs::write(path, format!("{}\n", json))?;
                writeln!(
                    out,
                    "Exported {} check(s) to {}",
                    editor.rows().len(),
                    path.display()
                )?;
            }
            None => writeln!(out, "{}", json)?,
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn exports_to_file() {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("site.json");
        fs::write(
            &site,
            r#"{"options": {"site_readiness_checks": [{"name": "blogname", "value": "Acme"}]}}"#,
        )
        .unwrap();
        let target = temp.path().join("checks.json");

        let mut output = Vec::new();
        ExportCommand::new(
            &site,
            ExportArgs {
                output: Some(target.clone()),
            },
        )
        .execute(&mut output)
        .unwrap();

        let exported: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(exported[0]["name"], "blogname");
        assert_eq!(exported[0]["value_type"], "string");
        assert!(String::from_utf8(output).unwrap().contains("Exported 1 check(s)"));
    }
}
