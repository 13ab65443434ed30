//! Rendering module for converting cheatsheets to string artifacts.

mod json;
mod markdown;
mod options;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::to_markdown;
pub use options::{RenderOptions, DEFAULT_PIXEL_WIDTH};
pub use text::{to_text, to_text_pages};
