//! Paginated plain text rendering for cheatsheets.

use crate::layout::{layout_section, Paginator};
use crate::model::{CheatsheetDocument, TextPage};

use super::RenderOptions;

/// Lay out a document into fixed-width pages.
///
/// Every section is wrapped into a block first; pagination then only breaks
/// between whole blocks.
pub fn to_text_pages(doc: &CheatsheetDocument, options: &RenderOptions) -> Vec<TextPage> {
    let blocks = doc
        .sections
        .iter()
        .map(|section| layout_section(section, options));
    Paginator::new(options).paginate(doc.title(), blocks)
}

/// Render a document to one text blob per page.
pub fn to_text(doc: &CheatsheetDocument, options: &RenderOptions) -> Vec<String> {
    to_text_pages(doc, options)
        .iter()
        .map(TextPage::content)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::pad_right;
    use crate::model::{Hotkey, Section};

    #[test]
    fn test_single_page_scenario() {
        let doc = CheatsheetDocument::new("Test").with_section(
            Section::new("Nav").with_hotkey(Hotkey::new("Super + H", "Move focus left")),
        );

        let pages = to_text_pages(&doc, &RenderOptions::default());
        assert_eq!(pages.len(), 1);

        let lines = &pages[0].lines;
        assert_eq!(lines[0], "═".repeat(35));
        assert_eq!(lines[1], pad_right("Test", 35));
        assert_eq!(lines[2], "═".repeat(35));
        assert!(lines.contains(&pad_right("Nav", 35)));

        let row = format!("{}{}", pad_right("S-H", 13), pad_right("Move focus left", 22));
        assert!(lines.contains(&row));
        assert_eq!(pages[0].line_count(), lines.len());
    }

    #[test]
    fn test_to_text_blobs() {
        let doc = CheatsheetDocument::new("Blob").with_section(Section::new("Only"));
        let blobs = to_text(&doc, &RenderOptions::default());
        assert_eq!(blobs.len(), 1);
        assert!(blobs[0].ends_with('\n'));
        assert!(blobs[0].contains("Blob"));
    }

    #[test]
    fn test_output_is_reproducible() {
        let doc = CheatsheetDocument::new("Same").with_section(
            Section::new("S")
                .with_note("A note that is long enough to wrap across a couple of lines")
                .with_hotkey(Hotkey::new("Ctrl + S", "Save")),
        );
        let options = RenderOptions::default();
        assert_eq!(to_text(&doc, &options), to_text(&doc, &options));
    }
}
