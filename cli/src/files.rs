//! Input discovery, TOML loading and artifact writing.

use std::fs;
use std::path::{Path, PathBuf};

use keysheet::{page_file_name, CheatsheetDocument, SheetOutput};

/// Extension of cheatsheet input files.
pub const INPUT_EXTENSION: &str = "toml";

/// Read one cheatsheet from a TOML file.
pub fn load_document(path: &Path) -> Result<CheatsheetDocument, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let doc = toml::from_str(&content).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(doc)
}

/// Expand inputs into a sorted list of TOML files.
///
/// Directories contribute their `.toml` children (not recursive); files are
/// taken as given.
pub fn collect_inputs(inputs: &[PathBuf]) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(input)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && has_input_extension(p))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }

    Ok(files)
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(INPUT_EXTENSION))
}

/// Base name used for every artifact of `input`.
pub fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "cheatsheet".to_string())
}

/// Write `<stem>.txt` or `<stem>_part<N>.txt` for every page.
pub fn write_text_pages(
    dir: &Path,
    stem: &str,
    output: &SheetOutput,
) -> keysheet::Result<Vec<PathBuf>> {
    let total = output.pages.len();
    let mut written = Vec::with_capacity(total);

    for (i, page) in output.pages.iter().enumerate() {
        let path = dir.join(page_file_name(stem, i, total, "txt"));
        fs::write(&path, page.content())?;
        written.push(path);
    }

    Ok(written)
}

/// Write `<stem>.png` or `<stem>_part<N>.png` for every page image.
pub fn write_page_images(
    dir: &Path,
    stem: &str,
    output: &SheetOutput,
) -> keysheet::Result<Vec<PathBuf>> {
    let total = output.images.len();
    let mut written = Vec::with_capacity(total);

    for (i, image) in output.images.iter().enumerate() {
        let path = dir.join(page_file_name(stem, i, total, "png"));
        image.save_png(&path)?;
        written.push(path);
    }

    Ok(written)
}

/// File name of a font specimen, e.g. `font-test-liberation-mono.png`.
pub fn specimen_file_name(font_name: &str) -> String {
    let slug = font_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("font-test-{}.png", slug)
}
