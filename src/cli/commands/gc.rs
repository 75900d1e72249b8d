//! Garbage-collect command implementation.
//!
//! The `ift gc` command removes the generated files of one owner and drops
//! its cache entry.

use crate::cli::args::GcArgs;
use crate::config::IftConfig;
use crate::error::Result;
use crate::templates::TemplateBuilder;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The gc command implementation.
pub struct GcCommand {
    config: IftConfig,
    args: GcArgs,
}

impl GcCommand {
    /// Create a new gc command.
    pub fn new(config: IftConfig, args: GcArgs) -> Self {
        Self { config, args }
    }
}

impl Command for GcCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut builder = TemplateBuilder::new(&self.config);

        if !builder.is_built(&self.args.owner) {
            ui.message(&format!(
                "No generated templates recorded for {}",
                self.args.owner
            ));
            return Ok(CommandResult::success());
        }

        let removed = builder.garbage_collect(&self.args.owner)?;
        for path in &removed {
            ui.detail(&format!("removed {}", path.display()));
        }
        ui.success(&format!(
            "Removed {} generated file(s) for {}",
            removed.len(),
            self.args.owner
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use std::fs;
    use tempfile::TempDir;

    use crate::ui::MockUI;

    #[test]
    fn removes_owner_files() {
        let temp = TempDir::new().unwrap();
        let config = IftConfig::default().resolve(temp.path());
        let file = temp.path().join("app/views/products/index.html");
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, "x").unwrap();
        Ledger::new(config.ledger_path())
            .store("products", file.clone())
            .unwrap();
        let mut ui = MockUI::new();

        GcCommand::new(
            config.clone(),
            GcArgs {
                owner: "products".into(),
            },
        )
        .execute(&mut ui)
        .unwrap();

        assert!(!file.exists());
        assert!(ui.successes()[0].contains("Removed 1 generated file(s)"));
        assert!(!Ledger::new(config.ledger_path()).exists("products"));
    }

    #[test]
    fn unknown_owner_is_reported() {
        let temp = TempDir::new().unwrap();
        let config = IftConfig::default().resolve(temp.path());
        let mut ui = MockUI::new();

        GcCommand::new(
            config,
            GcArgs {
                owner: "orders".into(),
            },
        )
        .execute(&mut ui)
        .unwrap();

        assert!(ui.has_output("No generated templates recorded for orders"));
    }
}
