//! Markdown rendering for cheatsheets.

use crate::model::{CheatsheetDocument, Hotkey, Section};

/// Convert a document to Markdown.
///
/// Sections become `##` headings, notes become block quotes and hotkeys a
/// two-column table with every chord alternative in a code span.
pub fn to_markdown(doc: &CheatsheetDocument) -> String {
    let mut output = format!("# {}\n\n", doc.title());

    if let Some(url) = doc.source_url() {
        output.push_str(&format!("> [Source]({})\n\n", url));
    }

    for section in &doc.sections {
        render_section(&mut output, section);
    }

    output
}

fn render_section(output: &mut String, section: &Section) {
    output.push_str(&format!("## {}\n\n", section.name));

    if let Some(note) = section.note() {
        output.push_str(&format!("> {}\n\n", note));
    }

    if !section.hotkeys.is_empty() {
        output.push_str("| Hotkey | Function |\n");
        output.push_str("| --- | --- |\n");
        for hotkey in &section.hotkeys {
            output.push_str(&format!(
                "| {} | {} |\n",
                format_keys(hotkey),
                escape_cell(&hotkey.description)
            ));
        }
    }

    output.push('\n');
}

fn format_keys(hotkey: &Hotkey) -> String {
    hotkey
        .alternatives()
        .map(|k| format!("`{}`", escape_cell(k)))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Escape pipes so cell text cannot end a table column.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown() {
        let doc = CheatsheetDocument::new("Hyprland")
            .with_url("https://wiki.hyprland.org")
            .with_section(
                Section::new("Windows")
                    .with_note("Super is the Windows key")
                    .with_hotkey(Hotkey::new("Super + Q / Super + W", "Close window")),
            );

        let md = to_markdown(&doc);
        assert!(md.starts_with("# Hyprland\n\n"));
        assert!(md.contains("> [Source](https://wiki.hyprland.org)\n\n"));
        assert!(md.contains("## Windows\n\n> Super is the Windows key\n\n"));
        assert!(md.contains("| Hotkey | Function |\n| --- | --- |\n"));
        assert!(md.contains("| `Super + Q` / `Super + W` | Close window |\n"));
    }

    #[test]
    fn test_section_without_hotkeys_has_no_table() {
        let doc = CheatsheetDocument::default().with_section(Section::new("Empty"));
        let md = to_markdown(&doc);
        assert_eq!(md, "# Cheatsheet\n\n## Empty\n\n\n");
    }

    #[test]
    fn test_escape_pipes() {
        let doc = CheatsheetDocument::new("T").with_section(
            Section::new("S").with_hotkey(Hotkey::new("Ctrl + |", "Split | vertically")),
        );
        let md = to_markdown(&doc);
        assert!(md.contains("| `Ctrl + \\|` | Split \\| vertically |"));
    }
}
