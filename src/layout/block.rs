//! Fixed-width text blocks for headers and sections.

use super::{abbreviate_keys, wrap_text};
use crate::model::{Hotkey, LaidOutBlock, Section};
use crate::render::RenderOptions;

/// Rule drawn above and below the document title.
pub const TITLE_RULE: char = '═';

/// Rule drawn above and below each section name.
pub const SECTION_RULE: char = '─';

/// Suffix appended to the title on continuation pages.
pub const CONTINUED_SUFFIX: &str = " (continued)";

const JOINER: &str = "/";
const SPACED_JOINER: &str = " / ";

/// Pad `text` with spaces to `width` characters. Longer text is returned as is.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}

fn rule(c: char, width: usize) -> String {
    std::iter::repeat(c).take(width).collect()
}

/// Wrap `text` to `width` and pad every line; blank text yields one blank line.
fn padded_lines(text: &str, width: usize) -> Vec<String> {
    let lines = wrap_text(text, width);
    if lines.is_empty() {
        return vec![pad_right("", width)];
    }
    lines.iter().map(|l| pad_right(l, width)).collect()
}

/// Lines of the page header: a double rule, the title and another double rule.
pub fn header_lines(title: &str, continued: bool, options: &RenderOptions) -> Vec<String> {
    let width = options.chars_per_line;
    let heading = if continued {
        format!("{}{}", title, CONTINUED_SUFFIX)
    } else {
        title.to_string()
    };

    let mut lines = vec![rule(TITLE_RULE, width)];
    lines.extend(padded_lines(&heading, width));
    lines.push(rule(TITLE_RULE, width));
    lines
}

/// Lay out one section as a block of fixed-width lines.
///
/// The block starts with a blank separator line, followed by the ruled
/// section name, the wrapped note and one row group per hotkey.
pub fn layout_section(section: &Section, options: &RenderOptions) -> LaidOutBlock {
    let width = options.chars_per_line;
    let mut lines = vec![String::new(), rule(SECTION_RULE, width)];
    lines.extend(padded_lines(&section.name, width));
    lines.push(rule(SECTION_RULE, width));

    if let Some(note) = section.note() {
        lines.push(String::new());
        lines.extend(padded_lines(note, width));
    }

    if !section.hotkeys.is_empty() {
        lines.push(String::new());
        for hotkey in &section.hotkeys {
            lines.extend(hotkey_rows(hotkey, options));
        }
    }

    LaidOutBlock::new(lines)
}

/// Rows for one hotkey: abbreviated chord on the left, wrapped description on the right.
pub fn hotkey_rows(hotkey: &Hotkey, options: &RenderOptions) -> Vec<String> {
    let key_col = options.key_column_width;
    let desc_col = options.description_column_width();

    let (alternatives, joiner) = chord_alternatives(hotkey);
    let key_lines = chord_lines(&alternatives, joiner, key_col.saturating_sub(1));
    let desc_lines = wrap_text(&hotkey.description, desc_col);

    let mut rows = Vec::new();

    // A lone alternative wider than the key column takes full lines of its own.
    let overflowing = key_lines.iter().any(|k| k.chars().count() >= key_col);
    let key_lines = if overflowing {
        rows.extend(key_lines.iter().map(|k| pad_right(k, options.chars_per_line)));
        Vec::new()
    } else {
        key_lines
    };

    let row_count = key_lines.len().max(desc_lines.len()).max(1);
    for i in 0..row_count {
        let key = key_lines.get(i).map(String::as_str).unwrap_or("");
        let desc = desc_lines.get(i).map(String::as_str).unwrap_or("");
        rows.push(format!("{}{}", pad_right(key, key_col), pad_right(desc, desc_col)));
    }
    rows
}

/// Abbreviated chord alternatives of `hotkey` and the joiner printed between them.
///
/// Alternatives are split before abbreviating so a `/` key survives. The
/// joiner is spaced when any alternative contains a `/` of its own.
pub fn chord_alternatives(hotkey: &Hotkey) -> (Vec<String>, &'static str) {
    let alternatives: Vec<String> = hotkey.alternatives().map(abbreviate_keys).collect();
    let joiner = if alternatives.iter().any(|a| a.contains('/')) {
        SPACED_JOINER
    } else {
        JOINER
    };
    (alternatives, joiner)
}

/// Break chord alternatives between joiners to fit `width`.
///
/// A broken line keeps the joiner's slash at its end.
fn chord_lines(alternatives: &[String], joiner: &str, width: usize) -> Vec<String> {
    let joiner_len = joiner.chars().count();
    let mut lines = Vec::new();
    let mut current = String::new();

    for alt in alternatives {
        if current.is_empty() {
            current.push_str(alt);
        } else if current.chars().count() + joiner_len + alt.chars().count() <= width {
            current.push_str(joiner);
            current.push_str(alt);
        } else {
            current.push_str(joiner.trim_end());
            lines.push(std::mem::take(&mut current));
            current.push_str(alt);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
