//! Generated-file ledger.
//!
//! The ledger records which files were generated on behalf of which owner
//! (typically a controller), so they can be garbage-collected before a
//! rebuild or removed in bulk by an operator.
//!
//! The backing file is a human-editable YAML mapping:
//!
//! ```yaml
//! products:
//! - /srv/app/views/products/index.html.erb
//! - /srv/app/public/stylesheets/app.css
//! ```
//!
//! - [`store`] - Lazily loaded ledger with per-owner operations
//! - [`clean`] - Bulk deletion of every ledgered file

pub mod clean;
pub mod store;

pub use clean::{clean_all, CleanReport};
pub use store::{Ledger, LedgerDocument};

use std::path::{Path, PathBuf};

/// File name of the ledger inside the configuration directory.
pub const LEDGER_FILE_NAME: &str = "ift.cache";

/// Get the ledger path inside a configuration directory.
pub fn ledger_path(config_dir: &Path) -> PathBuf {
    config_dir.join(LEDGER_FILE_NAME)
}
