//! Sentinel handling for source files.

use std::fs;
use std::path::Path;

use crate::error::{IftError, Result};

/// Line separating ordinary source code from embedded block definitions.
pub const SENTINEL: &str = "__END__";

/// Get the block-definition text of a source file.
///
/// Returns everything after the first line consisting solely of
/// [`SENTINEL`], or the whole input when there is no such line.
pub fn block_text(source: &str) -> &str {
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        offset += line.len();
        let bare = line.trim_end_matches('\n').trim_end_matches('\r');
        if bare == SENTINEL {
            return &source[offset..];
        }
    }
    source
}

/// Read a source file and return its block-definition text.
pub fn read_block_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| IftError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(block_text(&content).to_string())
}
