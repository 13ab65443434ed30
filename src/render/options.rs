//! Rendering options and configuration.

use crate::error::{Error, Result};

/// Default printer width in dots (58 mm thermal printers).
pub const DEFAULT_PIXEL_WIDTH: u32 = 384;

/// Options controlling text layout, pagination and rasterization.
///
/// One value is built at startup and shared, read-only, by every document
/// in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Printer width in pixels
    pub pixel_width: u32,

    /// Horizontal and vertical padding around raster pages, in pixels
    pub padding_px: u32,

    /// Characters per line of text output
    pub chars_per_line: usize,

    /// Width of the key column in hotkey rows, in characters
    pub key_column_width: usize,

    /// Maximum lines per page (a single oversized section may exceed it)
    pub max_lines: usize,

    /// Content lines a page must already hold before a break is allowed
    pub min_lines_before_break: usize,

    /// Font family name or path to a font file
    pub font_family: String,

    /// Glyph advance as a fraction of the font size for the monospace family
    pub char_width_ratio: f32,

    /// Line pitch as a multiple of the font size
    pub line_height: f32,

    /// Process documents of a batch in parallel
    pub parallel: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the printer width in pixels.
    pub fn with_pixel_width(mut self, width: u32) -> Self {
        self.pixel_width = width;
        self
    }

    /// Set the raster padding in pixels.
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding_px = padding;
        self
    }

    /// Set the number of characters per line.
    pub fn with_chars_per_line(mut self, chars: usize) -> Self {
        self.chars_per_line = chars;
        self
    }

    /// Set the key column width in characters.
    pub fn with_key_column_width(mut self, width: usize) -> Self {
        self.key_column_width = width;
        self
    }

    /// Set the maximum lines per page.
    pub fn with_max_lines(mut self, lines: usize) -> Self {
        self.max_lines = lines;
        self
    }

    /// Set how many content lines a page needs before it may be broken.
    pub fn with_min_lines_before_break(mut self, lines: usize) -> Self {
        self.min_lines_before_break = lines;
        self
    }

    /// Set the font family or font file path.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the char-width-to-font-size ratio.
    pub fn with_char_width_ratio(mut self, ratio: f32) -> Self {
        self.char_width_ratio = ratio;
        self
    }

    /// Set the line height multiplier.
    pub fn with_line_height(mut self, multiplier: f32) -> Self {
        self.line_height = multiplier;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Width of the description column in characters.
    pub fn description_column_width(&self) -> usize {
        self.chars_per_line.saturating_sub(self.key_column_width)
    }

    /// Reject options that cannot describe a printable page.
    pub fn validate(&self) -> Result<()> {
        if self.chars_per_line == 0 {
            return Err(Error::InvalidOptions(
                "chars_per_line must be positive".to_string(),
            ));
        }
        if self.key_column_width >= self.chars_per_line {
            return Err(Error::InvalidOptions(format!(
                "key column ({}) must be narrower than the line ({})",
                self.key_column_width, self.chars_per_line
            )));
        }
        if self.max_lines == 0 {
            return Err(Error::InvalidOptions(
                "max_lines must be positive".to_string(),
            ));
        }
        if self.padding_px >= self.pixel_width.div_ceil(2) {
            return Err(Error::InvalidOptions(format!(
                "padding {}px leaves no room on a {}px wide page",
                self.padding_px, self.pixel_width
            )));
        }
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.char_width_ratio) || !positive(self.line_height) {
            return Err(Error::InvalidOptions(
                "char_width_ratio and line_height must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pixel_width: DEFAULT_PIXEL_WIDTH,
            padding_px: 8,
            chars_per_line: 35,
            key_column_width: 13,
            max_lines: 60,
            min_lines_before_break: 10,
            font_family: "Liberation Mono".to_string(),
            char_width_ratio: 0.625,
            line_height: 1.3,
            parallel: true,
        }
    }
}
