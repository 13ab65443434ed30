//! Two-pass rasterization of fixed-width text pages.
//!
//! [`measure_lines`] computes the canvas size and the position of every line
//! as plain data; [`draw`] renders that geometry and thresholds the result.
//! Splitting the passes keeps geometry testable without a font.

use super::bitmap::MonochromeImage;
use super::canvas::Canvas;
use super::font::GlyphFont;
use crate::layout::LayoutMetrics;
use crate::model::TextPage;
use serde::Serialize;

/// Where one line of text is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinePlacement {
    /// Line text
    pub text: String,
    /// Pen start, in pixels from the left edge
    pub x: u32,
    /// Top edge of the line, in pixels from the top
    pub y: u32,
}

/// Result of the measure pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageGeometry {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Font size every line is drawn at
    pub font_size_px: u32,
    /// Line positions in drawing order
    pub lines: Vec<LinePlacement>,
}

/// Measure pass: size the canvas and place each line.
///
/// The canvas is `pixel_width` wide and `2 * padding + n * pitch` tall; line
/// `i` starts at `(padding, padding + i * pitch)`.
pub fn measure_lines<S: AsRef<str>>(lines: &[S], metrics: &LayoutMetrics) -> PageGeometry {
    let padding = metrics.padding_px;
    let pitch = metrics.line_pitch_px;

    let placements = lines
        .iter()
        .enumerate()
        .map(|(i, line)| LinePlacement {
            text: line.as_ref().to_string(),
            x: padding,
            y: padding.saturating_add((i as u32).saturating_mul(pitch)),
        })
        .collect();

    PageGeometry {
        width: metrics.pixel_width,
        height: padding
            .saturating_mul(2)
            .saturating_add((lines.len() as u32).saturating_mul(pitch))
            .max(1),
        font_size_px: metrics.font_size_px,
        lines: placements,
    }
}

/// Draw pass: render glyphs onto a white canvas and threshold to 1 bit.
pub fn draw(geometry: &PageGeometry, font: &dyn GlyphFont) -> MonochromeImage {
    let mut canvas = Canvas::new(geometry.width, geometry.height);
    let size = geometry.font_size_px as f32;

    for line in &geometry.lines {
        if line.text.trim().is_empty() {
            continue;
        }
        canvas.draw_text(&line.text, line.x as f32, line.y as f32, font, size);
    }

    canvas.threshold()
}

/// Measure and draw `lines` in one call.
pub fn rasterize_lines<S: AsRef<str>>(
    lines: &[S],
    metrics: &LayoutMetrics,
    font: &dyn GlyphFont,
) -> MonochromeImage {
    draw(&measure_lines(lines, metrics), font)
}

/// Rasterize a laid-out text page.
pub fn rasterize_page(
    page: &TextPage,
    metrics: &LayoutMetrics,
    font: &dyn GlyphFont,
) -> MonochromeImage {
    log::debug!(
        "Rasterizing page {} ({} lines at {}px)",
        page.number,
        page.line_count(),
        metrics.font_size_px
    );
    rasterize_lines(&page.lines, metrics, font)
}
