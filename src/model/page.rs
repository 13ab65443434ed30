//! Laid-out text: per-section blocks and paginated pages.

use serde::{Deserialize, Serialize};

/// The fixed-width lines produced for one section.
///
/// Blocks are the unit of pagination: a block is never split across pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaidOutBlock {
    /// Rendered lines, already padded to the page width
    pub lines: Vec<String>,
}

impl LaidOutBlock {
    /// Create a block from lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Number of lines in the block.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the block has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A bounded-height page of printer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Whether this page carries the "(continued)" header
    pub continued: bool,

    /// Lines of the page, header included
    pub lines: Vec<String>,
}

impl TextPage {
    /// Create a page from its lines.
    pub fn new(number: u32, continued: bool, lines: Vec<String>) -> Self {
        Self {
            number,
            continued,
            lines,
        }
    }

    /// Number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The page as a newline-joined text blob with a trailing newline.
    pub fn content(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// Width of the widest line in characters.
    pub fn max_line_width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }
}
