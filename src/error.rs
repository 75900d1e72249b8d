//! Error types for ift operations.
//!
//! This module defines [`IftError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `IftError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `IftError::Other`) for unexpected errors
//! - The block parser and the lenient ledger read never produce errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ift operations.
#[derive(Debug, Error)]
pub enum IftError {
    /// A requested block name has no matching block in the source file.
    #[error("Template {name} not found in {}", source_file.display())]
    TemplateNotFound { name: String, source_file: PathBuf },

    /// The source file holding the embedded blocks could not be read.
    #[error("Failed to read source file {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ledger could not be loaded on the authoritative (clean) path.
    #[error("Failed to load cache {}: {message}", path.display())]
    LedgerUnreadable { path: PathBuf, message: String },

    /// A ledgered file is missing from disk during bulk clean.
    #[error(
        "Potential cache corruption. File {} is listed in the cache ({}) but doesn't exist.",
        file.display(),
        ledger.display()
    )]
    LedgerCorrupted { file: PathBuf, ledger: PathBuf },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ift operations.
pub type Result<T> = std::result::Result<T, IftError>;
