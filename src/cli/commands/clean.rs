//! Clean command implementation.
//!
//! The `ift clean` command removes every file listed in the cache, across
//! all owners. A listed file that no longer exists stops the run: the cache
//! may be corrupt and is not trusted further.

use crate::cli::args::CleanArgs;
use crate::config::IftConfig;
use crate::error::Result;
use crate::ledger::{clean_all, Ledger};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The clean command implementation.
pub struct CleanCommand {
    config: IftConfig,
    args: CleanArgs,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(config: IftConfig, args: CleanArgs) -> Self {
        Self { config, args }
    }
}

impl Command for CleanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ledger_path = self.config.ledger_path();
        let report = clean_all(&ledger_path)?;

        for path in &report.removed {
            ui.detail(&format!("removed {}", path.display()));
        }
        ui.success(&format!(
            "Removed {} generated file(s)",
            report.removed.len()
        ));

        if self.args.prune {
            Ledger::new(&ledger_path).clear()?;
            ui.message(&format!("Emptied {}", ledger_path.display()));
        }
        Ok(CommandResult::success())
    }
}
