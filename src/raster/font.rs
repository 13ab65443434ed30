//! Glyph sources for rasterization.
//!
//! [`GlyphFont`] is the seam between layout and pixels: it measures advances
//! for pixel-mode wrapping and hands out coverage bitmaps for drawing.
//! [`FontFace`] implements it on top of `fontdue` for TrueType/OpenType files.

use crate::error::{Error, Result};
use crate::layout::TextMeasure;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A rasterized glyph: an 8-bit coverage bitmap plus placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glyph {
    /// Bitmap width in pixels
    pub width: usize,
    /// Bitmap height in pixels
    pub height: usize,
    /// Offset of the bitmap's left edge from the pen position
    pub xmin: i32,
    /// Offset of the bitmap's bottom edge from the baseline (positive is up)
    pub ymin: i32,
    /// Horizontal pen advance in pixels
    pub advance: f32,
    /// Row-major coverage, 0 = untouched, 255 = fully inked
    pub coverage: Vec<u8>,
}

/// A font that can measure and rasterize characters at a pixel size.
pub trait GlyphFont: Send + Sync {
    /// Human-readable name, used in logs and specimen labels.
    fn name(&self) -> &str;

    /// Rasterize `c` at `size` pixels.
    fn glyph(&self, c: char, size: f32) -> Glyph;

    /// Pen advance of `c` at `size` pixels.
    fn advance(&self, c: char, size: f32) -> f32 {
        self.glyph(c, size).advance
    }

    /// Distance from the top of a line to its baseline at `size` pixels.
    fn ascent(&self, size: f32) -> f32 {
        size * 0.8
    }

    /// Width of `text` at `size` pixels.
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|c| self.advance(c, size)).sum()
    }
}

/// Measures text with a [`GlyphFont`] at a fixed size, for pixel-mode wrapping.
#[derive(Clone, Copy)]
pub struct GlyphMeasure<'a> {
    font: &'a dyn GlyphFont,
    size: f32,
}

impl<'a> GlyphMeasure<'a> {
    /// Create a measure for `font` at `size` pixels.
    pub fn new(font: &'a dyn GlyphFont, size: f32) -> Self {
        Self { font, size }
    }
}

impl TextMeasure for GlyphMeasure<'_> {
    fn measure(&self, text: &str) -> f32 {
        self.font.text_width(text, self.size)
    }
}

/// A TrueType/OpenType face loaded with `fontdue`.
pub struct FontFace {
    name: String,
    font: fontdue::Font,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace").field("name", &self.name).finish()
    }
}

impl FontFace {
    /// Parse font data.
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self> {
        let name = name.into();
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
            .map_err(|e| Error::FontLoad(format!("{}: {}", name, e)))?;
        Ok(Self { name, font })
    }

    /// Read and parse a font file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_bytes(name, data)
    }
}

impl GlyphFont for FontFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn glyph(&self, c: char, size: f32) -> Glyph {
        let (metrics, coverage) = self.font.rasterize(c, size);
        Glyph {
            width: metrics.width,
            height: metrics.height,
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            advance: metrics.advance_width,
            coverage,
        }
    }

    fn advance(&self, c: char, size: f32) -> f32 {
        self.font.metrics(c, size).advance_width
    }

    fn ascent(&self, size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(size)
            .map(|m| m.ascent)
            .unwrap_or(size * 0.8)
    }
}

/// Font weight of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Regular,
    Bold,
}

/// Regular and bold faces of one family.
///
/// Families without a bold file reuse the regular face for bold text.
#[derive(Clone)]
pub struct Typeface {
    /// Face for body text
    pub regular: Arc<dyn GlyphFont>,
    /// Face for titles, headings and chords
    pub bold: Arc<dyn GlyphFont>,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("regular", &self.regular.name())
            .field("bold", &self.bold.name())
            .finish()
    }
}

impl Typeface {
    /// Use one face for both weights.
    pub fn new(regular: impl GlyphFont + 'static) -> Self {
        let regular: Arc<dyn GlyphFont> = Arc::new(regular);
        Self {
            bold: Arc::clone(&regular),
            regular,
        }
    }

    /// Set a separate bold face.
    pub fn with_bold(mut self, bold: impl GlyphFont + 'static) -> Self {
        self.bold = Arc::new(bold);
        self
    }

    /// Face for `weight`.
    pub fn face(&self, weight: Weight) -> &dyn GlyphFont {
        match weight {
            Weight::Regular => self.regular.as_ref(),
            Weight::Bold => self.bold.as_ref(),
        }
    }

    /// Name of the regular face.
    pub fn name(&self) -> &str {
        self.regular.name()
    }

    /// Load a family by name or from a font file path.
    ///
    /// Supports:
    /// - a path to a `.ttf`/`.otf` file, with a bold sibling found by swapping
    ///   `Regular` for `Bold` in the file name,
    /// - a family name like `"Liberation Mono"`, looked up in the system font
    ///   directories as `LiberationMono-Regular.ttf`, `LiberationMono.ttf`, ...
    pub fn load(family: &str) -> Result<Self> {
        let regular_path = resolve_font(family, &["Regular", ""])?;
        log::debug!("Resolved font '{}' to {}", family, regular_path.display());

        let mut typeface = Self::new(FontFace::from_path(&regular_path)?);
        match find_bold_sibling(&regular_path) {
            Some(bold_path) => {
                typeface = typeface.with_bold(FontFace::from_path(&bold_path)?);
            }
            None => log::debug!("No bold face for '{}', using regular", family),
        }
        Ok(typeface)
    }
}

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

/// Resolve a family name or path to a font file.
fn resolve_font(family: &str, suffixes: &[&str]) -> Result<PathBuf> {
    let direct = PathBuf::from(family);
    if is_font_file(&direct) {
        if direct.is_file() {
            return Ok(direct);
        }
        return Err(Error::FontNotFound(direct.display().to_string()));
    }

    let stem: String = family.chars().filter(|c| !c.is_whitespace()).collect();
    let candidates = candidate_file_names(&stem, suffixes);

    for dir in font_dirs() {
        if let Some(found) = find_in_dir(&dir, &candidates, 4) {
            return Ok(found);
        }
    }

    Err(Error::FontNotFound(format!(
        "{} (tried {} in the system font directories)",
        family,
        candidates.join(", ")
    )))
}

fn candidate_file_names(stem: &str, suffixes: &[&str]) -> Vec<String> {
    let mut names = Vec::new();
    for suffix in suffixes {
        for ext in FONT_EXTENSIONS {
            if suffix.is_empty() {
                names.push(format!("{}.{}", stem, ext));
            } else {
                names.push(format!("{}-{}.{}", stem, suffix, ext));
            }
        }
    }
    names
}

fn find_bold_sibling(regular: &Path) -> Option<PathBuf> {
    let file_name = regular.file_name()?.to_str()?;
    let bold_name = if file_name.contains("Regular") {
        file_name.replace("Regular", "Bold")
    } else {
        let stem = regular.file_stem()?.to_str()?;
        let ext = regular.extension()?.to_str()?;
        format!("{}-Bold.{}", stem, ext)
    };
    let candidate = regular.with_file_name(bold_name);
    candidate.is_file().then_some(candidate)
}

fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs
}

fn find_in_dir(dir: &Path, names: &[String], depth: usize) -> Option<PathBuf> {
    for name in names {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    if depth == 0 {
        return None;
    }

    let mut subdirs: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    // read_dir order is platform-defined; sort so lookups are reproducible
    subdirs.sort();

    subdirs
        .iter()
        .find_map(|sub| find_in_dir(sub, names, depth - 1))
}
