//! Packing section blocks into bounded-height pages.

use super::header_lines;
use crate::model::{LaidOutBlock, TextPage};
use crate::render::RenderOptions;

/// Greedy page packer.
///
/// Blocks are appended in order to the current page. A page is closed before
/// a block when the block would push it past `max_lines` and the page already
/// holds more than `min_lines_before_break` content lines; otherwise the block
/// is appended even if the page then overflows. Blocks are never split.
#[derive(Debug, Clone)]
pub struct Paginator<'a> {
    options: &'a RenderOptions,
}

struct PageBuilder {
    continued: bool,
    lines: Vec<String>,
    header_len: usize,
}

impl PageBuilder {
    fn new(title: &str, continued: bool, options: &RenderOptions) -> Self {
        let lines = header_lines(title, continued, options);
        Self {
            continued,
            header_len: lines.len(),
            lines,
        }
    }

    fn content_lines(&self) -> usize {
        self.lines.len() - self.header_len
    }

    fn finish(self, number: u32) -> TextPage {
        TextPage::new(number, self.continued, self.lines)
    }
}

impl<'a> Paginator<'a> {
    /// Create a paginator using the page limits from `options`.
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// Pack `blocks` into pages headed by `title`.
    ///
    /// Zero blocks yield a single header-only page.
    pub fn paginate<I>(&self, title: &str, blocks: I) -> Vec<TextPage>
    where
        I: IntoIterator<Item = LaidOutBlock>,
    {
        let mut pages = Vec::new();
        let mut current = PageBuilder::new(title, false, self.options);

        for block in blocks {
            let overflows = current.lines.len() + block.line_count() > self.options.max_lines;
            if overflows && current.content_lines() > self.options.min_lines_before_break {
                log::debug!(
                    "Page {} closed at {} lines before a {}-line block",
                    pages.len() + 1,
                    current.lines.len(),
                    block.line_count()
                );
                let finished = std::mem::replace(
                    &mut current,
                    PageBuilder::new(title, true, self.options),
                );
                pages.push(finished.finish(pages.len() as u32 + 1));
            }
            current.lines.extend(block.lines);
        }

        pages.push(current.finish(pages.len() as u32 + 1));
        pages
    }
}
