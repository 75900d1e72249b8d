//! ift - In-file templates.
//!
//! A source file may carry its own templates after an `__END__` line, each
//! introduced by an `@@ name` marker. ift parses those blocks, writes them
//! where the host expects templates, records every generated file in a
//! YAML cache (`ift.cache`) and removes stale output on rebuild or on demand.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and path resolution
//! - [`error`] - Error types and result aliases
//! - [`ledger`] - The generated-file cache and bulk clean
//! - [`parser`] - Template block extraction
//! - [`templates`] - Host contract, builder and render interceptor
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use ift::parser::{block_text, parse_blocks};
//!
//! let source = "fn main() {}\n__END__\n@@ index.html\n<h1>Hi</h1>\n";
//! let blocks = parse_blocks(block_text(source));
//! assert_eq!(blocks.get("index.html"), Some("<h1>Hi</h1>\n"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ledger;
pub mod parser;
pub mod templates;
pub mod ui;

pub use error::{IftError, Result};
