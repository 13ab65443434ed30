//! Document model types for cheatsheet content.
//!
//! This module defines the input shape ([`CheatsheetDocument`], [`Section`],
//! [`Hotkey`]) and the intermediate text layout ([`LaidOutBlock`],
//! [`TextPage`]) that flows from layout into the text and raster renderers.

mod document;
mod page;
mod section;

pub use document::{CheatsheetDocument, Metadata, FALLBACK_TITLE};
pub use page::{LaidOutBlock, TextPage};
pub use section::{Hotkey, Section, CHORD_SEPARATOR};
