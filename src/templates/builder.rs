//! Template materialization.

use std::fs;
use std::path::{Path, PathBuf};

use super::host::TemplateHost;
use crate::config::IftConfig;
use crate::error::{IftError, Result};
use crate::ledger::Ledger;
use crate::parser::{parse_blocks, read_block_text};

/// Files touched by one build pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Generated files removed before writing.
    pub collected: Vec<PathBuf>,
    /// Files written and recorded in the ledger.
    pub written: Vec<PathBuf>,
    /// Destinations left alone because a file already existed there.
    pub skipped: Vec<PathBuf>,
}

/// Result of [`TemplateBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The owner was already built and no rebuild was requested.
    AlreadyBuilt,
    /// Blocks were extracted and written.
    Built(BuildReport),
}

/// Writes embedded blocks to disk and records them in the ledger.
#[derive(Debug)]
pub struct TemplateBuilder {
    ledger: Ledger,
    collect_before_build: bool,
}

impl TemplateBuilder {
    /// Create a builder using the configured ledger location.
    pub fn new(config: &IftConfig) -> Self {
        Self {
            ledger: Ledger::new(config.ledger_path()),
            collect_before_build: config.garbage_collect,
        }
    }

    /// Create a builder around an existing ledger.
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger,
            collect_before_build: true,
        }
    }

    /// Get the ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Get the ledger mutably.
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Check if templates were already generated for an owner.
    pub fn is_built(&mut self, owner: &str) -> bool {
        self.ledger.exists(owner)
    }

    /// Extract the blocks of `source_file` and write them where the host
    /// wants them.
    ///
    /// Returns [`BuildOutcome::AlreadyBuilt`] without reading the source when
    /// the owner already has a ledger entry and the host does not ask for a
    /// rebuild. Existing files are never overwritten nor recorded.
    pub fn build<H>(&mut self, host: &mut H, source_file: &Path) -> Result<BuildOutcome>
    where
        H: TemplateHost + ?Sized,
    {
        let owner = host.owner_key();
        if self.ledger.exists(&owner) && !host.should_rebuild() {
            tracing::debug!("Templates for {} already built", owner);
            return Ok(BuildOutcome::AlreadyBuilt);
        }

        let blocks = parse_blocks(&read_block_text(source_file)?);

        host.prepare_roots()?;

        let mut report = BuildReport::default();
        if self.collect_before_build {
            report.collected = self.garbage_collect(&owner)?;
        }

        for block in &blocks {
            let path = host.path_for(&block.name);
            if path.exists() {
                tracing::debug!("Keeping existing template {}", path.display());
                report.skipped.push(path);
                continue;
            }

            write_template(&path, &block.content)?;
            self.ledger.store(&owner, path.clone())?;
            tracing::debug!("Generated {}", path.display());
            report.written.push(path);
        }

        tracing::info!(
            "Built {} template(s) for {} from {}",
            report.written.len(),
            owner,
            source_file.display()
        );
        Ok(BuildOutcome::Built(report))
    }

    /// Remove the files generated for an owner and drop its ledger entry.
    ///
    /// Recorded files that are already gone are ignored. Returns the files
    /// actually removed.
    pub fn garbage_collect(&mut self, owner: &str) -> Result<Vec<PathBuf>> {
        let files = match self.ledger.files_for(owner) {
            Some(files) => files.to_vec(),
            None => return Ok(Vec::new()),
        };

        let mut removed = Vec::new();
        for file in files {
            match fs::remove_file(&file) {
                Ok(()) => {
                    tracing::debug!("Removed {}", file.display());
                    removed.push(file);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }

        self.ledger.reset(owner)?;
        Ok(removed)
    }
}

/// Get the raw content of one block of a source file.
///
/// Nothing is written and the ledger is not consulted.
pub fn render_from_file(name: &str, source_file: &Path) -> Result<String> {
    let blocks = parse_blocks(&read_block_text(source_file)?);

    blocks
        .get(name)
        .map(str::to_string)
        .ok_or_else(|| IftError::TemplateNotFound {
            name: name.to_string(),
            source_file: std::path::absolute(source_file)
                .unwrap_or_else(|_| source_file.to_path_buf()),
        })
}

fn write_template(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, content)?;
    Ok(())
}
