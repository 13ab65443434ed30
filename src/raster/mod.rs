//! Rasterization to 1-bit images for thermal printers.
//!
//! Two renditions share the same font and canvas plumbing:
//!
//! - fixed-pitch pages ([`measure_lines`] then [`draw`]), one image per
//!   [`TextPage`](crate::model::TextPage),
//! - a styled sheet ([`SheetLayout`]), one tall image per document.
//!
//! Both end in [`Canvas::threshold`], so every output pixel is pure black or white.

mod bitmap;
mod canvas;
mod font;
mod page;
mod sheet;

pub use bitmap::{MonochromeImage, BLACK, WHITE};
pub use canvas::{luminance, Canvas, LUMINANCE_THRESHOLD};
pub use font::{FontFace, Glyph, GlyphFont, GlyphMeasure, Typeface, Weight};
pub use page::{draw, measure_lines, rasterize_lines, rasterize_page, LinePlacement, PageGeometry};
pub use sheet::{
    render_sheet, specimen, specimen_document, DrawOp, SheetLayout, SheetStyle, SPECIMEN_HOTKEYS,
};
