//! Per-document pipeline and batch processing.
//!
//! A [`Keysheet`] holds the immutable configuration of a run (render
//! options, the metrics derived from them and optionally loaded fonts) and
//! turns documents into text pages and page images. Documents are
//! independent, so a batch fans out over `rayon` unless configured
//! sequential.

use crate::error::{Error, Result};
use crate::layout::LayoutMetrics;
use crate::model::{CheatsheetDocument, TextPage};
use crate::raster::{rasterize_page, render_sheet, MonochromeImage, SheetStyle, Typeface};
use crate::render::{to_text_pages, RenderOptions};
use rayon::prelude::*;

/// Everything produced for one document.
#[derive(Debug, Clone)]
pub struct SheetOutput {
    /// Resolved document title
    pub title: String,
    /// Text pages in order
    pub pages: Vec<TextPage>,
    /// One image per page; empty when no fonts are configured
    pub images: Vec<MonochromeImage>,
}

impl SheetOutput {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page contents as text blobs.
    pub fn text_blobs(&self) -> Vec<String> {
        self.pages.iter().map(TextPage::content).collect()
    }
}

/// Outcome of one document in a batch.
#[derive(Debug)]
pub struct BatchItem {
    /// Name the document was submitted under
    pub name: String,
    /// Rendered output or the error that stopped this document
    pub result: Result<SheetOutput>,
}

impl BatchItem {
    /// Whether the document rendered successfully.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Cheatsheet renderer.
///
/// # Example
///
/// ```
/// use keysheet::{CheatsheetDocument, Hotkey, Keysheet, RenderOptions, Section};
///
/// let doc = CheatsheetDocument::new("Vim")
///     .with_section(Section::new("Motion").with_hotkey(Hotkey::new("Ctrl + D", "Half page down")));
///
/// let keysheet = Keysheet::new().with_options(RenderOptions::default().with_max_lines(40));
/// let output = keysheet.render(&doc).unwrap();
/// assert_eq!(output.page_count(), 1);
/// assert!(output.images.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Keysheet {
    options: RenderOptions,
    metrics: LayoutMetrics,
    fonts: Option<Typeface>,
    sheet_style: SheetStyle,
}

impl Default for Keysheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Keysheet {
    /// Create a renderer with default options and no fonts.
    pub fn new() -> Self {
        let options = RenderOptions::default();
        Self {
            metrics: LayoutMetrics::derive(&options),
            options,
            fonts: None,
            sheet_style: SheetStyle::default(),
        }
    }

    /// Replace the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.metrics = LayoutMetrics::derive(&options);
        self.options = options;
        self
    }

    /// Use `fonts` for page images and styled sheets.
    pub fn with_fonts(mut self, fonts: Typeface) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Load the family named by the options' `font_family`.
    pub fn load_fonts(self) -> Result<Self> {
        let fonts = Typeface::load(&self.options.font_family)?;
        log::debug!("Loaded font {}", fonts.name());
        Ok(self.with_fonts(fonts))
    }

    /// Set the style of styled sheets.
    pub fn with_sheet_style(mut self, style: SheetStyle) -> Self {
        self.sheet_style = style;
        self
    }

    /// Process batches on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Current render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Metrics derived from the options.
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Configured fonts, if any.
    pub fn fonts(&self) -> Option<&Typeface> {
        self.fonts.as_ref()
    }

    /// Lay out `doc` into text pages.
    pub fn render_text(&self, doc: &CheatsheetDocument) -> Result<Vec<TextPage>> {
        self.options.validate()?;
        Ok(to_text_pages(doc, &self.options))
    }

    /// Lay out `doc` and rasterize every page when fonts are configured.
    pub fn render(&self, doc: &CheatsheetDocument) -> Result<SheetOutput> {
        let pages = self.render_text(doc)?;

        let images = match &self.fonts {
            Some(fonts) => pages
                .iter()
                .map(|page| rasterize_page(page, &self.metrics, fonts.regular.as_ref()))
                .collect(),
            None => Vec::new(),
        };

        log::debug!(
            "Rendered '{}': {} pages, {} images",
            doc.title(),
            pages.len(),
            images.len()
        );

        Ok(SheetOutput {
            title: doc.title().to_string(),
            pages,
            images,
        })
    }

    /// Render `doc` as one styled image.
    pub fn render_sheet(&self, doc: &CheatsheetDocument) -> Result<MonochromeImage> {
        let fonts = self
            .fonts
            .as_ref()
            .ok_or_else(|| Error::Render("styled sheets need a font".to_string()))?;
        Ok(render_sheet(
            doc,
            &self.sheet_style,
            fonts,
            self.options.pixel_width,
        ))
    }

    /// Render many documents independently.
    ///
    /// A failing document is logged and reported in its [`BatchItem`]; the
    /// rest of the batch still runs. Results keep the input order.
    pub fn render_batch(&self, docs: &[(String, CheatsheetDocument)]) -> Vec<BatchItem> {
        let process = |(name, doc): &(String, CheatsheetDocument)| {
            let result = self.render(doc);
            if let Err(e) = &result {
                log::warn!("Failed to render '{}': {}", name, e);
            }
            BatchItem {
                name: name.clone(),
                result,
            }
        };

        if self.options.parallel {
            docs.par_iter().map(process).collect()
        } else {
            docs.iter().map(process).collect()
        }
    }
}

/// File name of page `index` (0-based) out of `total` pages.
///
/// A single page gets `<stem>.<ext>`; several get `<stem>_part<N>.<ext>`
/// with `N` starting at 1.
pub fn page_file_name(stem: &str, index: usize, total: usize, extension: &str) -> String {
    if total <= 1 {
        format!("{}.{}", stem, extension)
    } else {
        format!("{}_part{}.{}", stem, index + 1, extension)
    }
}
