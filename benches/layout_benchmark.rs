//! Benchmarks for keysheet layout and rasterization.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic cheatsheets and a synthetic glyph font, so
//! no font file is needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keysheet::layout::{abbreviate_keys, wrap_text, LayoutMetrics};
use keysheet::raster::{rasterize_page, Glyph, GlyphFont};
use keysheet::{CheatsheetDocument, Hotkey, Keysheet, RenderOptions, Section};

/// Creates a cheatsheet with `sections` sections of `hotkeys` hotkeys each.
fn create_test_document(sections: usize, hotkeys: usize) -> CheatsheetDocument {
    let mut doc = CheatsheetDocument::new("Benchmark");
    for s in 0..sections {
        let mut section =
            Section::new(format!("Section {}", s)).with_note("Super is the logo key on most keyboards");
        for h in 0..hotkeys {
            section.add_hotkey(Hotkey::new(
                format!("Super + Shift + {} / Ctrl + Alt + {}", h, h),
                format!("Benchmark action number {} with a description that wraps", h),
            ));
        }
        doc.add_section(section);
    }
    doc
}

/// Solid box glyphs at 60% of the font size.
struct BoxFont;

impl GlyphFont for BoxFont {
    fn name(&self) -> &str {
        "box"
    }

    fn glyph(&self, c: char, size: f32) -> Glyph {
        let advance = size * 0.6;
        if c.is_whitespace() {
            return Glyph {
                advance,
                ..Glyph::default()
            };
        }
        let width = (advance as usize).saturating_sub(1).max(1);
        let height = (size * 0.7) as usize;
        Glyph {
            width,
            height,
            xmin: 0,
            ymin: 0,
            advance,
            coverage: vec![220; width * height],
        }
    }
}

/// Benchmark chord abbreviation.
fn bench_abbreviate(c: &mut Criterion) {
    c.bench_function("abbreviate_keys", |b| {
        b.iter(|| abbreviate_keys(black_box("Super + Shift + Left / Ctrl + Alt + CapsLock + H")));
    });
}

/// Benchmark greedy wrapping.
fn bench_wrap(c: &mut Criterion) {
    let text = "Move the focused window to the workspace on the left of the current one";
    c.bench_function("wrap_text_22", |b| {
        b.iter(|| wrap_text(black_box(text), 22));
    });
}

/// Benchmark full text layout at various document sizes.
fn bench_text_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_layout");
    let options = RenderOptions::default();

    for sections in [1, 10, 50].iter() {
        let doc = create_test_document(*sections, 20);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| keysheet::text_pages(black_box(&doc), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark rasterizing one full page.
fn bench_rasterize_page(c: &mut Criterion) {
    let options = RenderOptions::default();
    let metrics = LayoutMetrics::derive(&options);
    let doc = create_test_document(3, 20);
    let pages = keysheet::text_pages(&doc, &options).unwrap();

    c.bench_function("rasterize_page", |b| {
        b.iter(|| rasterize_page(black_box(&pages[0]), &metrics, &BoxFont));
    });
}

/// Benchmark batch rendering, parallel against sequential.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let docs: Vec<_> = (0..16)
        .map(|i| (format!("doc{}", i), create_test_document(5, 20)))
        .collect();

    let parallel = Keysheet::new();
    let sequential = Keysheet::new().sequential();

    group.bench_function("parallel", |b| {
        b.iter(|| parallel.render_batch(black_box(&docs)));
    });
    group.bench_function("sequential", |b| {
        b.iter(|| sequential.render_batch(black_box(&docs)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_abbreviate,
    bench_wrap,
    bench_text_layout,
    bench_rasterize_page,
    bench_batch,
);
criterion_main!(benches);
