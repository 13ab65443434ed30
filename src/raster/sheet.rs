//! Styled single-image cheatsheets.
//!
//! Unlike the fixed-pitch pages, a sheet mixes font sizes and weights: a bold
//! title, bold section headings, indented notes and a two-column hotkey table
//! with a rule under its header. Wrapping is done in pixels against the real
//! glyph advances, and over-wide tokens are cut with an ellipsis.
//!
//! [`SheetLayout::measure`] computes every draw operation and the final
//! height in one pass; [`SheetLayout::draw`] replays them.

use super::bitmap::MonochromeImage;
use super::canvas::Canvas;
use super::font::{GlyphMeasure, Typeface, Weight};
use crate::layout::{chord_alternatives, GreedyWrapper, Overflow};
use crate::model::{CheatsheetDocument, Hotkey, Section};

/// Number of hotkeys a font specimen shows.
pub const SPECIMEN_HOTKEYS: usize = 3;

/// Sizes and spacing of a styled sheet, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyle {
    /// Margin on every side of the sheet
    pub padding: f32,
    /// Font size of the document title
    pub title_size: f32,
    /// Font size of section headings
    pub heading_size: f32,
    /// Font size of notes and descriptions
    pub text_size: f32,
    /// Font size of chords and the table header
    pub key_size: f32,
    /// Line pitch as a multiple of the font size
    pub line_height: f32,
    /// Gap between the key and description columns
    pub column_spacing: f32,
    /// Share of the content width given to the key column
    pub key_column_ratio: f32,
    /// Left indent of section notes
    pub note_indent: f32,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            padding: 16.0,
            title_size: 20.0,
            heading_size: 16.0,
            text_size: 13.0,
            key_size: 12.0,
            line_height: 1.3,
            column_spacing: 8.0,
            key_column_ratio: 0.35,
            note_indent: 12.0,
        }
    }
}

impl SheetStyle {
    /// Large print used for font specimens.
    pub fn specimen() -> Self {
        Self {
            title_size: 36.0,
            heading_size: 30.0,
            text_size: 26.0,
            key_size: 24.0,
            line_height: 1.5,
            column_spacing: 10.0,
            ..Self::default()
        }
    }

    fn pitch(&self, size: f32) -> f32 {
        size * self.line_height
    }
}

/// One drawing step of a sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A single line of text with its top edge at `y`
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        weight: Weight,
    },
    /// A solid black horizontal rule
    Rule {
        x: f32,
        y: f32,
        width: f32,
        thickness: f32,
    },
}

/// Measured sheet: canvas size plus the operations that fill it.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels, including the bottom padding
    pub height: u32,
    /// Draw operations in paint order
    pub ops: Vec<DrawOp>,
}

impl SheetLayout {
    /// Lay out a whole document on a canvas `width` pixels wide.
    pub fn measure(
        doc: &CheatsheetDocument,
        style: &SheetStyle,
        fonts: &Typeface,
        width: u32,
    ) -> Self {
        let mut cursor = Cursor::new(style, fonts, width);

        let lines = cursor.text(
            doc.title(),
            cursor.left,
            cursor.content_width,
            style.title_size,
            Weight::Bold,
            style.pitch(style.title_size),
        );
        cursor.advance(lines as f32 * style.pitch(style.title_size) + 12.0);

        for section in &doc.sections {
            cursor.section(section);
        }

        let height = (cursor.y + style.padding).ceil().max(1.0) as u32;
        log::debug!(
            "Measured sheet '{}': {}x{} with {} draw ops",
            doc.title(),
            width,
            height,
            cursor.ops.len()
        );

        Self {
            width,
            height,
            ops: cursor.ops,
        }
    }

    /// Render the operations and threshold to 1 bit.
    pub fn draw(&self, fonts: &Typeface) -> MonochromeImage {
        let mut canvas = Canvas::new(self.width, self.height);

        for op in &self.ops {
            match op {
                DrawOp::Text {
                    text,
                    x,
                    y,
                    size,
                    weight,
                } => {
                    canvas.draw_text(text, *x, *y, fonts.face(*weight), *size);
                }
                DrawOp::Rule {
                    x,
                    y,
                    width,
                    thickness,
                } => canvas.fill_rect(*x, *y, *width, *thickness),
            }
        }

        canvas.threshold()
    }
}

/// Running layout state for one sheet.
struct Cursor<'a> {
    style: &'a SheetStyle,
    fonts: &'a Typeface,
    left: f32,
    content_width: f32,
    y: f32,
    ops: Vec<DrawOp>,
}

impl<'a> Cursor<'a> {
    fn new(style: &'a SheetStyle, fonts: &'a Typeface, width: u32) -> Self {
        Self {
            style,
            fonts,
            left: style.padding,
            content_width: (width as f32 - style.padding * 2.0).max(1.0),
            y: style.padding,
            ops: Vec::new(),
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Wrap `text` into `max_width` and emit one op per line from the current `y`.
    fn text(
        &mut self,
        text: &str,
        x: f32,
        max_width: f32,
        size: f32,
        weight: Weight,
        pitch: f32,
    ) -> usize {
        let lines = self.wrap(text, max_width, size, weight);
        self.emit(lines, x, size, weight, pitch)
    }

    fn wrap(&self, text: &str, max_width: f32, size: f32, weight: Weight) -> Vec<String> {
        let measure = GlyphMeasure::new(self.fonts.face(weight), size);
        GreedyWrapper::new(&measure, max_width)
            .with_overflow(Overflow::Ellipsis)
            .wrap(text)
    }

    /// Wrap a hotkey's chord alternatives, breaking after the joiner slash.
    ///
    /// A bare `/` joiner gets a space for wrapping that is removed afterwards.
    fn chord_lines(&self, hotkey: &Hotkey, max_width: f32, size: f32) -> Vec<String> {
        let (alternatives, joiner) = chord_alternatives(hotkey);
        if joiner.contains(' ') {
            return self.wrap(&alternatives.join(joiner), max_width, size, Weight::Bold);
        }

        let spaced = format!("{} ", joiner);
        self.wrap(&alternatives.join(spaced.as_str()), max_width, size, Weight::Bold)
            .into_iter()
            .map(|line| line.replace(spaced.as_str(), joiner))
            .collect()
    }

    fn emit(
        &mut self,
        lines: Vec<String>,
        x: f32,
        size: f32,
        weight: Weight,
        pitch: f32,
    ) -> usize {
        let count = lines.len();
        for (i, line) in lines.into_iter().enumerate() {
            self.ops.push(DrawOp::Text {
                text: line,
                x,
                y: self.y + i as f32 * pitch,
                size,
                weight,
            });
        }
        count
    }

    fn section(&mut self, section: &Section) {
        let style = self.style;

        let heading = self.text(
            &section.name,
            self.left,
            self.content_width,
            style.heading_size,
            Weight::Bold,
            style.pitch(style.heading_size),
        );
        self.advance(heading as f32 * style.pitch(style.heading_size) + 4.0);

        if let Some(note) = section.note() {
            let lines = self.text(
                note,
                self.left + style.note_indent,
                self.content_width - style.note_indent,
                style.text_size - 1.0,
                Weight::Regular,
                style.pitch(style.text_size),
            );
            self.advance(lines as f32 * style.pitch(style.text_size) + 8.0);
        }

        if !section.hotkeys.is_empty() {
            self.table(&section.hotkeys);
        }
    }

    fn table(&mut self, hotkeys: &[Hotkey]) {
        let style = self.style;
        let key_width = (self.content_width * style.key_column_ratio).floor();
        let desc_x = self.left + key_width + style.column_spacing;
        let desc_width = (self.content_width - key_width - style.column_spacing).max(1.0);
        let row_pitch = style.pitch(style.text_size);

        for (label, x) in [("Hotkey", self.left), ("Function", desc_x)] {
            self.ops.push(DrawOp::Text {
                text: label.to_string(),
                x,
                y: self.y,
                size: style.key_size,
                weight: Weight::Bold,
            });
        }
        self.advance(style.pitch(style.key_size) + 4.0);
        self.ops.push(DrawOp::Rule {
            x: self.left,
            y: self.y,
            width: self.content_width,
            thickness: 2.0,
        });
        self.advance(4.0);

        for hotkey in hotkeys {
            let keys = self.chord_lines(hotkey, key_width, style.key_size);
            let key_lines = self.emit(keys, self.left, style.key_size, Weight::Bold, row_pitch);
            let desc_lines = self.text(
                &hotkey.description,
                desc_x,
                desc_width,
                style.text_size,
                Weight::Regular,
                row_pitch,
            );
            let rows = key_lines.max(desc_lines).max(1);
            self.advance(rows as f32 * row_pitch + 8.0);
        }

        self.advance(8.0);
    }
}

/// Copy of `doc` keeping only the first section and its first few hotkeys.
pub fn specimen_document(doc: &CheatsheetDocument) -> CheatsheetDocument {
    let sections = doc
        .sections
        .first()
        .map(|section| {
            let mut sample = section.clone();
            sample.hotkeys.truncate(SPECIMEN_HOTKEYS);
            vec![sample]
        })
        .unwrap_or_default();

    CheatsheetDocument {
        metadata: doc.metadata.clone(),
        sections,
    }
}

/// Measure and draw a styled sheet.
pub fn render_sheet(
    doc: &CheatsheetDocument,
    style: &SheetStyle,
    fonts: &Typeface,
    width: u32,
) -> MonochromeImage {
    SheetLayout::measure(doc, style, fonts, width).draw(fonts)
}

/// Render the specimen excerpt of `doc` once per candidate font.
///
/// Results keep the order of `candidates`.
pub fn specimen(
    doc: &CheatsheetDocument,
    candidates: &[(String, Typeface)],
    style: &SheetStyle,
    width: u32,
) -> Vec<(String, MonochromeImage)> {
    let sample = specimen_document(doc);
    candidates
        .iter()
        .map(|(name, fonts)| {
            log::debug!("Rendering specimen with {}", name);
            (name.clone(), render_sheet(&sample, style, fonts, width))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::font::{Glyph, GlyphFont};

    /// Fixed 6px advance; no ink.
    struct Monospace;

    impl GlyphFont for Monospace {
        fn name(&self) -> &str {
            "mono"
        }

        fn glyph(&self, _c: char, _size: f32) -> Glyph {
            Glyph {
                advance: 6.0,
                ..Glyph::default()
            }
        }
    }

    fn sample() -> CheatsheetDocument {
        CheatsheetDocument::new("Hyprland").with_section(
            Section::new("Windows")
                .with_note("Super is the logo key")
                .with_hotkey(Hotkey::new("Super + Q", "Close"))
                .with_hotkey(Hotkey::new("Super + Shift + Left / Super + Shift + H", "Move"))
                .with_hotkey(Hotkey::new("Super + F", "Fullscreen"))
                .with_hotkey(Hotkey::new("Super + V", "Float")),
        )
    }

    fn texts(layout: &SheetLayout) -> Vec<&str> {
        layout
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                DrawOp::Rule { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_measure_emits_title_heading_and_table() {
        let fonts = Typeface::new(Monospace);
        let layout = SheetLayout::measure(&sample(), &SheetStyle::default(), &fonts, 384);

        let texts = texts(&layout);
        assert_eq!(texts[0], "Hyprland");
        assert_eq!(texts[1], "Windows");
        assert!(texts.contains(&"Super is the logo key"));
        assert!(texts.contains(&"Hotkey"));
        assert!(texts.contains(&"Function"));
        assert!(texts.contains(&"S-Q"));
        assert!(texts.contains(&"Fullscreen"));

        let rules = layout
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rule { .. }))
            .count();
        assert_eq!(rules, 1);
        assert_eq!(layout.width, 384);
    }

    #[test]
    fn test_key_column_breaks_between_alternatives() {
        let fonts = Typeface::new(Monospace);
        // Key column is floor(352 * 0.35) = 123px, 20 chars at 6px
        let wide = SheetLayout::measure(&sample(), &SheetStyle::default(), &fonts, 384);
        assert!(texts(&wide).contains(&"S-Sh-Left/S-Sh-H"));

        // Key column is floor(208 * 0.35) = 72px, 12 chars at 6px
        let narrow = SheetLayout::measure(&sample(), &SheetStyle::default(), &fonts, 240);
        let texts = texts(&narrow);
        assert!(texts.contains(&"S-Sh-Left/"));
        assert!(texts.contains(&"S-Sh-H"));
    }

    #[test]
    fn test_slash_keys_survive_in_key_column() {
        let fonts = Typeface::new(Monospace);
        let doc = CheatsheetDocument::new("Editor").with_section(
            Section::new("Edit")
                .with_hotkey(Hotkey::new("Ctrl + /", "Toggle comment"))
                .with_hotkey(Hotkey::new("/", "Search forward"))
                .with_hotkey(Hotkey::new("Ctrl + / / Ctrl + K", "Comment")),
        );
        let layout = SheetLayout::measure(&doc, &SheetStyle::default(), &fonts, 384);

        let texts = texts(&layout);
        assert!(texts.contains(&"C-/"));
        assert!(texts.contains(&"/"));
        assert!(texts.contains(&"C-/ / C-K"));
    }

    #[test]
    fn test_all_ops_fit_the_canvas() {
        let fonts = Typeface::new(Monospace);
        let style = SheetStyle::default();
        let layout = SheetLayout::measure(&sample(), &style, &fonts, 384);

        for op in &layout.ops {
            match op {
                DrawOp::Text { text, x, y, size, .. } => {
                    let width = fonts.regular.text_width(text, *size);
                    assert!(x + width <= 384.0 - style.padding, "{} overflows", text);
                    assert!(*y < layout.height as f32);
                }
                DrawOp::Rule { x, width, .. } => assert!(x + width <= 384.0),
            }
        }
    }

    #[test]
    fn test_long_words_are_ellipsized() {
        let doc = CheatsheetDocument::new("T").with_section(
            Section::new("S").with_hotkey(Hotkey::new("K", "x".repeat(200))),
        );
        let fonts = Typeface::new(Monospace);
        let layout = SheetLayout::measure(&doc, &SheetStyle::default(), &fonts, 384);
        assert!(texts(&layout).iter().any(|t| t.ends_with("...")));
    }

    #[test]
    fn test_height_grows_with_content() {
        let fonts = Typeface::new(Monospace);
        let style = SheetStyle::default();
        let short = SheetLayout::measure(&specimen_document(&sample()), &style, &fonts, 384);
        let full = SheetLayout::measure(&sample(), &style, &fonts, 384);
        assert!(full.height > short.height);

        let empty = SheetLayout::measure(&CheatsheetDocument::default(), &style, &fonts, 384);
        assert!(empty.height < short.height);
    }

    #[test]
    fn test_specimen_document() {
        let doc = sample().with_section(Section::new("Second"));
        let specimen = specimen_document(&doc);
        assert_eq!(specimen.sections.len(), 1);
        assert_eq!(specimen.sections[0].hotkeys.len(), SPECIMEN_HOTKEYS);
        assert_eq!(specimen.title(), "Hyprland");

        let empty = specimen_document(&CheatsheetDocument::default());
        assert!(empty.sections.is_empty());
    }

    #[test]
    fn test_specimen_keeps_candidate_order() {
        let candidates = vec![
            ("b".to_string(), Typeface::new(Monospace)),
            ("a".to_string(), Typeface::new(Monospace)),
        ];
        let images = specimen(&sample(), &candidates, &SheetStyle::specimen(), 384);
        let names: Vec<_> = images.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(images.iter().all(|(_, image)| image.is_binary()));
    }
}
