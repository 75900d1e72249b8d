//! Extract command implementation.
//!
//! The `ift extract` command prints one embedded template as raw text, or
//! lists the names of all templates in a source file.

use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;
use crate::parser::{parse_blocks, read_block_text};
use crate::templates::render_from_file;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The extract command implementation.
pub struct ExtractCommand {
    source: PathBuf,
    name: Option<String>,
}

impl ExtractCommand {
    /// Create a new extract command for an already resolved source path.
    pub fn new(source: PathBuf, name: Option<String>) -> Self {
        Self { source, name }
    }
}

impl Command for ExtractCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(name) = &self.name else {
            let blocks = parse_blocks(&read_block_text(&self.source)?);
            if blocks.is_empty() {
                ui.warning(&format!("No templates found in {}", self.source.display()));
            }
            for name in blocks.names() {
                ui.result(name);
            }
            return Ok(CommandResult::success());
        };

        let content = render_from_file(name, &self.source)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        Ok(CommandResult::success())
    }
}
