//! Bulk removal of generated files.

use std::fs;
use std::path::{Path, PathBuf};

use super::store::Ledger;
use crate::error::{IftError, Result};

/// Outcome of a bulk clean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Files deleted, in processing order.
    pub removed: Vec<PathBuf>,
}

/// Delete every file recorded in the ledger, across all owners.
///
/// The ledger is read strictly: if it is absent or unparsable nothing is
/// deleted. Paths are processed owner by owner (owners sorted by key, paths
/// in recorded order). The first recorded path missing from disk aborts the
/// run with [`IftError::LedgerCorrupted`]; files already deleted stay
/// deleted and later ones are left untouched.
///
/// The ledger document itself is not modified.
pub fn clean_all(ledger_path: &Path) -> Result<CleanReport> {
    let document = Ledger::load_strict(ledger_path)?;
    let mut report = CleanReport::default();

    for file in document.values().flatten() {
        if !file.exists() {
            return Err(IftError::LedgerCorrupted {
                file: file.clone(),
                ledger: ledger_path.to_path_buf(),
            });
        }

        fs::remove_file(file)?;
        tracing::debug!("Removed {}", file.display());
        report.removed.push(file.clone());
    }

    Ok(report)
}
