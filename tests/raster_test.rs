//! Integration tests for rasterization with a synthetic glyph font.

use keysheet::layout::LayoutMetrics;
use keysheet::raster::{
    draw, measure_lines, rasterize_lines, render_sheet, Glyph, GlyphFont, SheetStyle, Typeface,
    BLACK, WHITE,
};
use keysheet::{CheatsheetDocument, Hotkey, Keysheet, RenderOptions, Section};

/// Glyphs are boxes filled with a coverage gradient, so the canvas holds
/// real gray levels before thresholding.
struct GradientFont;

impl GlyphFont for GradientFont {
    fn name(&self) -> &str {
        "gradient"
    }

    fn glyph(&self, c: char, size: f32) -> Glyph {
        let advance = (size * 0.6).round();
        if c.is_whitespace() {
            return Glyph {
                advance,
                ..Glyph::default()
            };
        }

        let width = (advance as usize).saturating_sub(1).max(1);
        let height = (size * 0.7).round() as usize;
        let seed = c as usize;
        let coverage = (0..height)
            .flat_map(|row| (0..width).map(move |col| ((row * 37 + col * 53 + seed) % 256) as u8))
            .collect();

        Glyph {
            width,
            height,
            xmin: 0,
            ymin: 0,
            advance,
            coverage,
        }
    }
}

fn metrics() -> LayoutMetrics {
    LayoutMetrics::derive(&RenderOptions::default())
}

fn sample() -> CheatsheetDocument {
    CheatsheetDocument::new("Test").with_section(
        Section::new("Nav")
            .with_note("Super is the logo key")
            .with_hotkey(Hotkey::new("Super + H", "Move focus left"))
            .with_hotkey(Hotkey::new("Super + L", "Move focus right")),
    )
}

#[test]
fn test_rasterization_is_deterministic() {
    let lines = ["═══════", "Hello, printer", "", "S-H   Move focus left"];
    let first = rasterize_lines(&lines, &metrics(), &GradientFont);
    let second = rasterize_lines(&lines, &metrics(), &GradientFont);
    assert_eq!(first, second);
}

#[test]
fn test_every_pixel_is_black_or_white() {
    let image = rasterize_lines(&["The quick brown fox", "jumps over"], &metrics(), &GradientFont);
    assert!(image.is_binary());
    assert!(image.pixels.iter().all(|&p| p == BLACK || p == WHITE));
    assert!(image.black_pixel_count() > 0);
}

#[test]
fn test_dimensions_follow_metrics() {
    let metrics = metrics();
    let image = rasterize_lines(&["a", "b", "c", "d"], &metrics, &GradientFont);
    assert_eq!(image.width, 384);
    assert_eq!(
        image.height,
        metrics.padding_px * 2 + 4 * metrics.line_pitch_px
    );
    assert_eq!(image.pixels.len(), (image.width * image.height) as usize);
    assert_eq!(image.pack_bits().len(), 48 * image.height as usize);
}

#[test]
fn test_zero_lines_is_blank_padding() {
    let image = rasterize_lines::<&str>(&[], &metrics(), &GradientFont);
    assert_eq!(image.width, 384);
    assert_eq!(image.height, 16);
    assert_eq!(image.black_pixel_count(), 0);
}

#[test]
fn test_blank_lines_draw_nothing() {
    let image = rasterize_lines(&["", "     "], &metrics(), &GradientFont);
    assert_eq!(image.black_pixel_count(), 0);
}

#[test]
fn test_ink_stays_inside_its_line() {
    let metrics = metrics();
    let geometry = measure_lines(&["", "XXXX", ""], &metrics);
    let image = draw(&geometry, &GradientFont);

    let top = geometry.lines[1].y;
    let bottom = top + metrics.line_pitch_px;
    for y in 0..image.height {
        for x in 0..image.width {
            if image.pixel(x, y) == Some(BLACK) {
                assert!(y >= top && y < bottom, "ink at y={} outside {}..{}", y, top, bottom);
                assert!(x >= metrics.padding_px);
            }
        }
    }
}

#[test]
fn test_pipeline_renders_one_image_per_page() {
    let keysheet = Keysheet::new()
        .with_options(RenderOptions::default().with_max_lines(12).with_min_lines_before_break(1))
        .with_fonts(Typeface::new(GradientFont));

    let doc = sample().with_section(Section::new("More").with_hotkey(Hotkey::new("Super + J", "Down")));
    let output = keysheet.render(&doc).unwrap();

    assert!(output.page_count() > 1);
    assert_eq!(output.images.len(), output.page_count());
    for (page, image) in output.pages.iter().zip(&output.images) {
        assert_eq!(
            image.height,
            16 + page.line_count() as u32 * keysheet.metrics().line_pitch_px
        );
        assert!(image.is_binary());
    }
}

#[test]
fn test_styled_sheet_is_binary_and_full_width() {
    let fonts = Typeface::new(GradientFont);
    let image = render_sheet(&sample(), &SheetStyle::default(), &fonts, 384);
    assert_eq!(image.width, 384);
    assert!(image.height > 100);
    assert!(image.is_binary());
    assert!(image.black_pixel_count() > 0);

    let again = Keysheet::new()
        .with_fonts(fonts)
        .render_sheet(&sample())
        .unwrap();
    assert_eq!(image, again);
}

#[test]
fn test_png_output() {
    let image = rasterize_lines(&["png"], &metrics(), &GradientFont);
    let png = image.to_png().unwrap();
    assert_eq!(&png[1..4], b"PNG");
}
