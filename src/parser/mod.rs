//! Embedded template extraction.
//!
//! Source files may carry template blocks after a sentinel line:
//!
//! ```text
//! __END__
//! @@ index.html.erb
//! <h1>Product List</h1>
//!
//! #@@ draft.html.erb
//! this block is commented out and ignored
//!
//! @@ show.html.erb
//! <h1>Product</h1>
//! ```
//!
//! - [`block`] - Line-oriented block parser and its result types
//! - [`source`] - Sentinel handling and source file reading
//!
//! # Example
//!
//! ```
//! use ift::parser::{block_text, parse_blocks};
//!
//! let source = "struct Products;\n__END__\n@@ index\nhello\n";
//! let blocks = parse_blocks(block_text(source));
//! assert_eq!(blocks.get("index"), Some("hello\n"));
//! ```

pub mod block;
pub mod source;

pub use block::{parse_blocks, ParseResult, TemplateBlock};
pub use source::{block_text, read_block_text, SENTINEL};
