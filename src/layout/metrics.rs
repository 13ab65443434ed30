//! Font size and line pitch derived from the printer width.
//!
//! The derivation is closed-form: the usable width is divided by the desired
//! number of characters, and the per-character width is converted to a font
//! size through the empirical advance ratio of the monospace family. No font
//! file is consulted.

use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};

/// Pixel metrics shared by every raster page of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Canvas width in pixels
    pub pixel_width: u32,

    /// Padding on every side, in pixels
    pub padding_px: u32,

    /// Characters per line the font size was derived for
    pub chars_per_line: usize,

    /// Derived font size in pixels
    pub font_size_px: u32,

    /// Derived distance between consecutive lines, in pixels
    pub line_pitch_px: u32,
}

impl LayoutMetrics {
    /// Derive metrics from render options.
    pub fn derive(options: &RenderOptions) -> Self {
        let (font_size_px, line_pitch_px) = font_metrics(
            options.pixel_width,
            options.padding_px,
            options.chars_per_line,
            options.char_width_ratio,
            options.line_height,
        );
        log::debug!(
            "Derived {}px font with {}px pitch for {} chars on {}px",
            font_size_px,
            line_pitch_px,
            options.chars_per_line,
            options.pixel_width
        );

        Self {
            pixel_width: options.pixel_width,
            padding_px: options.padding_px,
            chars_per_line: options.chars_per_line,
            font_size_px,
            line_pitch_px,
        }
    }

    /// Width available to text, in pixels.
    pub fn usable_width(&self) -> u32 {
        self.pixel_width
            .saturating_sub(self.padding_px.saturating_mul(2))
    }

    /// Target advance of one character, in pixels.
    pub fn char_width(&self) -> f32 {
        self.usable_width() as f32 / self.chars_per_line.max(1) as f32
    }
}

/// Compute `(font_size_px, line_pitch_px)`.
///
/// `font = round((width - 2*padding) / chars / ratio)` and
/// `pitch = ceil(font * line_height)`.
pub fn font_metrics(
    pixel_width: u32,
    padding_px: u32,
    chars_per_line: usize,
    char_width_ratio: f32,
    line_height: f32,
) -> (u32, u32) {
    let usable = pixel_width.saturating_sub(padding_px.saturating_mul(2)) as f32;
    let char_width = usable / chars_per_line.max(1) as f32;
    let font_size = (char_width / char_width_ratio).round().max(1.0);
    let pitch = (font_size * line_height).ceil().max(1.0);
    (font_size as u32, pitch as u32)
}
