//! Build command implementation.
//!
//! The `ift build` command writes the templates embedded in a source file,
//! the same way a render would.

use std::path::{Path, PathBuf};

use crate::cli::args::BuildArgs;
use crate::config::IftConfig;
use crate::error::Result;
use crate::templates::{BuildOutcome, ProjectHost, TemplateBuilder};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The build command implementation.
pub struct BuildCommand {
    project_root: PathBuf,
    config: IftConfig,
    source: PathBuf,
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command for an already resolved source path.
    pub fn new(project_root: &Path, config: IftConfig, source: PathBuf, args: BuildArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            source,
            args,
        }
    }

    fn host(&self) -> ProjectHost {
        let mut host = ProjectHost::new(&self.args.owner, &self.config, &self.project_root)
            .with_reload(self.config.reload_templates || self.args.reload);
        if let Some(dir) = &self.args.template_dir {
            host = host.with_template_dir(dir);
        }
        host
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut host = self.host();
        let mut builder = TemplateBuilder::new(&self.config);

        let report = match builder.build(&mut host, &self.source)? {
            BuildOutcome::AlreadyBuilt => {
                ui.message(&format!(
                    "Templates for {} already built (use --reload to rebuild)",
                    self.args.owner
                ));
                return Ok(CommandResult::success());
            }
            BuildOutcome::Built(report) => report,
        };

        for path in &report.collected {
            ui.detail(&format!("removed {}", path.display()));
        }
        for path in &report.written {
            ui.detail(&format!("wrote   {}", path.display()));
        }
        for path in &report.skipped {
            ui.detail(&format!("kept    {}", path.display()));
        }

        ui.success(&format!(
            "Wrote {} template(s) for {}, kept {} existing",
            report.written.len(),
            self.args.owner,
            report.skipped.len()
        ));
        Ok(CommandResult::success())
    }
}
