//! List command implementation.
//!
//! The `ift list` command shows the generated-file cache, owner by owner.

use crate::cli::args::ListArgs;
use crate::config::IftConfig;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    config: IftConfig,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config: IftConfig, args: ListArgs) -> Self {
        Self { config, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut ledger = Ledger::new(self.config.ledger_path());
        let document = ledger.document();

        if self.args.json {
            let output = serde_json::to_string_pretty(document)
                .map_err(|e| anyhow::anyhow!("Failed to serialize cache: {}", e))?;
            ui.result(&output);
            return Ok(CommandResult::success());
        }

        if document.is_empty() {
            ui.message(&format!(
                "No generated templates recorded in {}",
                self.config.ledger_path().display()
            ));
            return Ok(CommandResult::success());
        }

        for (owner, files) in document {
            ui.result(&format!("{} ({} file(s))", owner, files.len()));
            for file in files {
                if file.exists() {
                    ui.result(&format!("  {}", file.display()));
                } else {
                    ui.result(&format!("  {} (missing)", file.display()));
                }
            }
        }
        Ok(CommandResult::success())
    }
}
