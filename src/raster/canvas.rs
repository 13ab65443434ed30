//! RGBA drawing surface and 1-bit thresholding.
//!
//! Glyph coverage is composited in black onto an opaque white canvas, so
//! anti-aliased edges become shades of gray. [`Canvas::threshold`] then
//! collapses every pixel to pure black or white by perceived luminance.

use super::bitmap::{MonochromeImage, BLACK, WHITE};
use super::font::GlyphFont;
use image::{Rgba, RgbaImage};

/// Luminance above which a pixel becomes white.
pub const LUMINANCE_THRESHOLD: f32 = 127.5;

/// Perceived luminance of an RGB color (ITU-R BT.601 weights).
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// White RGBA surface that text and rules are drawn onto.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create an opaque white canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([WHITE, WHITE, WHITE, 255])),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Underlying RGBA image.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }

    /// Draw `text` with its line's top edge at `top` and pen start at `x`.
    ///
    /// Returns the pen position after the last character.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        top: f32,
        font: &dyn GlyphFont,
        size: f32,
    ) -> f32 {
        let baseline = (top + font.ascent(size)).round() as i64;
        let mut pen = x;

        for c in text.chars() {
            let glyph = font.glyph(c, size);
            let left = pen.round() as i64 + glyph.xmin as i64;
            let glyph_top = baseline - glyph.ymin as i64 - glyph.height as i64;

            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    let coverage = glyph
                        .coverage
                        .get(row * glyph.width + col)
                        .copied()
                        .unwrap_or(0);
                    if coverage > 0 {
                        self.ink(left + col as i64, glyph_top + row as i64, coverage);
                    }
                }
            }

            pen += glyph.advance;
        }

        pen
    }

    /// Fill a solid black rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let x0 = x.round().max(0.0) as i64;
        let y0 = y.round().max(0.0) as i64;
        let x1 = (x + width).round() as i64;
        let y1 = (y + height).round() as i64;

        for py in y0..y1 {
            for px in x0..x1 {
                self.ink(px, py, 255);
            }
        }
    }

    /// Darken one pixel by `coverage` (0..=255) of black.
    fn ink(&mut self, x: i64, y: i64, coverage: u8) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        let keep = 255 - coverage as u16;
        for channel in pixel.0.iter_mut().take(3) {
            *channel = (*channel as u16 * keep / 255) as u8;
        }
    }

    /// Collapse to a 1-bit image: white iff luminance exceeds [`LUMINANCE_THRESHOLD`].
    pub fn threshold(&self) -> MonochromeImage {
        let pixels = self
            .image
            .pixels()
            .map(|Rgba([r, g, b, _])| {
                if luminance(*r, *g, *b) > LUMINANCE_THRESHOLD {
                    WHITE
                } else {
                    BLACK
                }
            })
            .collect();

        MonochromeImage {
            width: self.width(),
            height: self.height(),
            pixels,
        }
    }
}
