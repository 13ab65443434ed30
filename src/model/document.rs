//! Document-level types.

use super::Section;
use serde::{Deserialize, Serialize};

/// Title used when a cheatsheet does not name itself.
pub const FALLBACK_TITLE: &str = "Cheatsheet";

/// A cheatsheet: a title, an optional source link and ordered sections.
///
/// The shape mirrors the cheatsheet files the CLI reads:
///
/// ```toml
/// [metadata]
/// title = "Hyprland"
/// url = "https://wiki.hyprland.org"
///
/// [[sections]]
/// name = "Navigation"
///
/// [[sections.hotkeys]]
/// keys = "Super + H"
/// description = "Move focus left"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatsheetDocument {
    /// Document metadata (title, source URL)
    #[serde(default)]
    pub metadata: Metadata,

    /// Sections in print order
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl CheatsheetDocument {
    /// Create a new document with the given title and no sections.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                title: Some(title.into()),
                url: None,
            },
            sections: Vec::new(),
        }
    }

    /// Set the source URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.metadata.url = Some(url.into());
        self
    }

    /// Append a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// The printed title, falling back to [`FALLBACK_TITLE`].
    pub fn title(&self) -> &str {
        self.metadata
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(FALLBACK_TITLE)
    }

    /// The source URL, if any.
    pub fn source_url(&self) -> Option<&str> {
        self.metadata.url.as_deref().filter(|u| !u.trim().is_empty())
    }

    /// Total number of hotkeys across all sections.
    pub fn hotkey_count(&self) -> usize {
        self.sections.iter().map(|s| s.hotkeys.len()).sum()
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Cheatsheet title
    #[serde(default)]
    pub title: Option<String>,

    /// Where the hotkeys were taken from
    #[serde(default)]
    pub url: Option<String>,
}
