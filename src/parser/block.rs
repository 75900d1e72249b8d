//! Block parser.
//!
//! A marker line is `@@` at column 0, optional whitespace, then the block
//! name up to the end of the line. A `#` directly before `@@` comments the
//! whole block out until the next marker.

use regex::Regex;
use std::sync::LazyLock;

static MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#)?@@\s*(.*)$").unwrap());

/// A named content fragment extracted from source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBlock {
    /// Raw text following the marker, not validated.
    pub name: String,
    /// Lines following the marker, terminators included.
    pub content: String,
}

/// Blocks parsed from one source, unique by name.
///
/// Iteration follows the order in which names were first declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    blocks: Vec<TemplateBlock>,
}

impl ParseResult {
    /// Get the content of a block by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.blocks
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.content.as_str())
    }

    /// Block names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.name.as_str())
    }

    /// Iterate over all blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, TemplateBlock> {
        self.blocks.iter()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if no block was found.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Start a block, discarding any content already held under `name`.
    fn open(&mut self, name: &str) -> usize {
        match self.blocks.iter().position(|b| b.name == name) {
            Some(index) => {
                self.blocks[index].content.clear();
                index
            }
            None => {
                self.blocks.push(TemplateBlock {
                    name: name.to_string(),
                    content: String::new(),
                });
                self.blocks.len() - 1
            }
        }
    }
}

impl<'a> IntoIterator for &'a ParseResult {
    type Item = &'a TemplateBlock;
    type IntoIter = std::slice::Iter<'a, TemplateBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Parse raw block-definition text into named blocks.
///
/// Never fails: malformed input yields fewer or emptier blocks.
pub fn parse_blocks(text: &str) -> ParseResult {
    let mut result = ParseResult::default();
    let mut current: Option<usize> = None;
    let mut skip = false;

    for line in text.split_inclusive('\n') {
        if let Some(caps) = MARKER.captures(line.strip_suffix('\n').unwrap_or(line)) {
            skip = caps.get(1).is_some();
            current = if skip {
                None
            } else {
                let name = caps.get(2).map_or("", |m| m.as_str());
                Some(result.open(name))
            };
            continue;
        }

        if skip {
            continue;
        }

        if let Some(index) = current {
            result.blocks[index].content.push_str(line);
        }
    }

    result
}
