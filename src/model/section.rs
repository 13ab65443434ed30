//! Section and hotkey types.

use serde::{Deserialize, Serialize};

/// Separator between alternative chords in [`Hotkey::keys`].
pub const CHORD_SEPARATOR: &str = " / ";

/// A named group of hotkeys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    #[serde(default)]
    pub name: String,

    /// Optional free-form note printed under the heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Hotkeys in print order
    #[serde(default)]
    pub hotkeys: Vec<Hotkey>,
}

impl Section {
    /// Create an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            note: None,
            hotkeys: Vec::new(),
        }
    }

    /// Set the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Append a hotkey.
    pub fn with_hotkey(mut self, hotkey: Hotkey) -> Self {
        self.hotkeys.push(hotkey);
        self
    }

    /// Add a hotkey to the section.
    pub fn add_hotkey(&mut self, hotkey: Hotkey) {
        self.hotkeys.push(hotkey);
    }

    /// The note, ignoring blank ones.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// A key combination and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    /// One or more chords joined by `" / "`
    #[serde(default)]
    pub keys: String,

    /// What the chord does
    #[serde(default)]
    pub description: String,
}

impl Hotkey {
    /// Create a new hotkey.
    pub fn new(keys: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            keys: keys.into(),
            description: description.into(),
        }
    }

    /// The individual chord alternatives, trimmed.
    pub fn alternatives(&self) -> impl Iterator<Item = &str> {
        self.keys
            .split(CHORD_SEPARATOR)
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
