//! # keysheet
//!
//! Keyboard-shortcut cheatsheets for 58 mm thermal printers.
//!
//! This library lays out structured cheatsheet content (a title, sections
//! with optional notes, and hotkey/description pairs) into fixed-width text
//! pages and renders them as 1-bit images a thermal printer can print
//! directly.
//!
//! ## Quick Start
//!
//! ```
//! use keysheet::{CheatsheetDocument, Hotkey, RenderOptions, Section};
//!
//! let doc = CheatsheetDocument::new("Hyprland").with_section(
//!     Section::new("Focus").with_hotkey(Hotkey::new("Super + H / Super + Left", "Focus left")),
//! );
//!
//! let pages = keysheet::text_pages(&doc, &RenderOptions::default())?;
//! assert_eq!(pages.len(), 1);
//! print!("{}", pages[0].content());
//! # Ok::<(), keysheet::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Chord abbreviation**: `Super + Shift + Q` prints as `S-Sh-Q`
//! - **Greedy wrapping**: by characters for text, by glyph advances for images
//! - **Pagination**: sections are never split across pages
//! - **1-bit rasterization**: every pixel is pure black or white
//! - **Styled sheets**: one tall image per document with headings and a table
//! - **Parallel batches**: uses Rayon across independent documents

pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod raster;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{abbreviate_keys, wrap_text, LayoutMetrics};
pub use model::{CheatsheetDocument, Hotkey, LaidOutBlock, Metadata, Section, TextPage};
pub use pipeline::{page_file_name, BatchItem, Keysheet, SheetOutput};
pub use raster::{FontFace, GlyphFont, MonochromeImage, SheetLayout, SheetStyle, Typeface};
pub use render::{JsonFormat, RenderOptions, DEFAULT_PIXEL_WIDTH};

/// Lay out a document into text pages.
///
/// # Arguments
///
/// * `doc` - The cheatsheet to lay out
/// * `options` - Page width, column widths and page length
///
/// # Errors
///
/// Returns [`Error::InvalidOptions`] when the options describe an impossible page.
pub fn text_pages(doc: &CheatsheetDocument, options: &RenderOptions) -> Result<Vec<TextPage>> {
    options.validate()?;
    Ok(render::to_text_pages(doc, options))
}

/// Render a document to one text blob per page.
///
/// # Example
///
/// ```
/// use keysheet::{CheatsheetDocument, RenderOptions};
///
/// let blobs = keysheet::to_text(&CheatsheetDocument::new("Empty"), &RenderOptions::default())?;
/// assert!(blobs[0].contains("Empty"));
/// # Ok::<(), keysheet::Error>(())
/// ```
pub fn to_text(doc: &CheatsheetDocument, options: &RenderOptions) -> Result<Vec<String>> {
    options.validate()?;
    Ok(render::to_text(doc, options))
}

/// Convert a document to Markdown.
pub fn to_markdown(doc: &CheatsheetDocument) -> String {
    render::to_markdown(doc)
}

/// Convert a document to JSON.
pub fn to_json(doc: &CheatsheetDocument, format: JsonFormat) -> Result<String> {
    render::to_json(doc, format)
}

/// Lay out and rasterize a document, one image per page.
///
/// # Example
///
/// ```no_run
/// use keysheet::{CheatsheetDocument, RenderOptions, Typeface};
///
/// let fonts = Typeface::load("Liberation Mono")?;
/// let doc = CheatsheetDocument::new("Vim");
/// for image in keysheet::rasterize(&doc, &RenderOptions::default(), &fonts)? {
///     println!("{}x{}", image.width, image.height);
/// }
/// # Ok::<(), keysheet::Error>(())
/// ```
pub fn rasterize(
    doc: &CheatsheetDocument,
    options: &RenderOptions,
    fonts: &Typeface,
) -> Result<Vec<MonochromeImage>> {
    let output = Keysheet::new()
        .with_options(options.clone())
        .with_fonts(fonts.clone())
        .render(doc)?;
    Ok(output.images)
}
