//! Text layout for fixed-width printer output.
//!
//! The pieces here are pure functions over the document model:
//!
//! - [`abbreviate_keys`] shortens modifier names in chords,
//! - [`GreedyWrapper`] / [`wrap_text`] break text against a character or pixel budget,
//! - [`layout_section`] turns a section into a [`LaidOutBlock`](crate::model::LaidOutBlock),
//! - [`Paginator`] packs blocks into [`TextPage`](crate::model::TextPage)s,
//! - [`LayoutMetrics`] derives the raster font size and line pitch.

mod abbreviate;
mod block;
mod metrics;
mod paginate;
mod wrap;

pub use abbreviate::abbreviate_keys;
pub use block::{
    chord_alternatives, header_lines, hotkey_rows, layout_section, pad_right, CONTINUED_SUFFIX,
    SECTION_RULE, TITLE_RULE,
};
pub use metrics::{font_metrics, LayoutMetrics};
pub use paginate::Paginator;
pub use wrap::{wrap_text, CharCount, GreedyWrapper, Overflow, TextMeasure, ELLIPSIS};
