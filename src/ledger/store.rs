//! Ledger storage.

use anyhow::Context;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IftError, Result};

/// Owner key to generated file paths, in recorded order.
pub type LedgerDocument = BTreeMap<String, Vec<PathBuf>>;

/// Persistent record of generated files, keyed by owner.
///
/// The document is read lazily on first access and kept for the lifetime
/// of the instance. Every mutation rewrites the whole file. There is no
/// locking: concurrent writers on the same path are not supported.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    entries: Option<LedgerDocument>,
}

impl Ledger {
    /// Create a ledger backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: None,
        }
    }

    /// Create a ledger stored as `ift.cache` in a configuration directory.
    pub fn in_dir(config_dir: &Path) -> Self {
        Self::new(super::ledger_path(config_dir))
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a generated file to an owner's list and persist.
    pub fn store(&mut self, owner: &str, file: impl Into<PathBuf>) -> Result<()> {
        self.entries()
            .entry(owner.to_string())
            .or_default()
            .push(file.into());
        self.flush()
    }

    /// Get the files recorded for an owner.
    pub fn files_for(&mut self, owner: &str) -> Option<&[PathBuf]> {
        self.entries().get(owner).map(Vec::as_slice)
    }

    /// Check if an owner has an entry, even an empty one.
    pub fn exists(&mut self, owner: &str) -> bool {
        self.entries().contains_key(owner)
    }

    /// Remove an owner's entry and persist.
    pub fn reset(&mut self, owner: &str) -> Result<()> {
        self.entries().remove(owner);
        self.flush()
    }

    /// Remove every entry and persist.
    pub fn clear(&mut self) -> Result<()> {
        self.entries().clear();
        self.flush()
    }

    /// Owners with an entry, sorted.
    pub fn owners(&mut self) -> Vec<String> {
        self.entries().keys().cloned().collect()
    }

    /// Get the whole document.
    pub fn document(&mut self) -> &LedgerDocument {
        self.entries()
    }

    /// Drop the in-memory copy so the next access rereads the file.
    pub fn reload(&mut self) {
        self.entries = None;
    }

    /// Write the whole document to the backing file.
    pub fn flush(&mut self) -> Result<()> {
        let yaml = serde_yaml::to_string(&*self.entries()).context("Failed to serialize cache")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, yaml)?;

        tracing::debug!("Wrote cache {}", self.path.display());
        Ok(())
    }

    /// Load a ledger document, failing if it is absent or unparsable.
    ///
    /// This is the authoritative read used before deleting files.
    pub fn load_strict(path: &Path) -> Result<LedgerDocument> {
        let content = fs::read_to_string(path).map_err(|e| IftError::LedgerUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        parse_document(&content).map_err(|e| IftError::LedgerUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn entries(&mut self) -> &mut LedgerDocument {
        let path = &self.path;
        self.entries.get_or_insert_with(|| load_lenient(path))
    }
}

/// Load a ledger document, treating absent or corrupt files as empty.
fn load_lenient(path: &Path) -> LedgerDocument {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Cannot read cache {}: {}", path.display(), e);
            }
            return LedgerDocument::new();
        }
    };

    match parse_document(&content) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!("Ignoring unparsable cache {}: {}", path.display(), e);
            LedgerDocument::new()
        }
    }
}

fn parse_document(content: &str) -> std::result::Result<LedgerDocument, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(LedgerDocument::new());
    }
    let document: Option<LedgerDocument> = serde_yaml::from_str(content)?;
    Ok(document.unwrap_or_default())
}
