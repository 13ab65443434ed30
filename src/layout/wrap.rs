//! Greedy word wrapping against a character or pixel budget.
//!
//! Lines are filled left to right: a word joins the current line (with one
//! separating space) when the result still fits, otherwise the line is closed
//! and the word starts the next one. Words are never split. A word that is
//! wider than the whole budget is either kept intact on its own line
//! ([`Overflow::Keep`], the text-mode behaviour) or truncated with an
//! ellipsis ([`Overflow::Ellipsis`], the pixel-mode behaviour).

/// Marker appended to truncated tokens.
pub const ELLIPSIS: &str = "...";

/// Measures the rendered width of a run of text.
pub trait TextMeasure {
    /// Width of `text` in the unit the budget is expressed in.
    fn measure(&self, text: &str) -> f32;
}

/// Measures text in characters, for fixed-pitch output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCount;

impl TextMeasure for CharCount {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32
    }
}

/// What to do with a single word wider than the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Put the word on its own line unmodified
    #[default]
    Keep,
    /// Truncate the word and append [`ELLIPSIS`]
    Ellipsis,
}

/// Greedy line breaker over any [`TextMeasure`].
#[derive(Debug, Clone, Copy)]
pub struct GreedyWrapper<'a, M: TextMeasure + ?Sized> {
    measure: &'a M,
    max_width: f32,
    overflow: Overflow,
}

impl<'a, M: TextMeasure + ?Sized> GreedyWrapper<'a, M> {
    /// Create a wrapper with the given budget.
    pub fn new(measure: &'a M, max_width: f32) -> Self {
        Self {
            measure,
            max_width,
            overflow: Overflow::Keep,
        }
    }

    /// Set the overflow policy.
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Split `text` into lines. Empty or blank input yields no lines.
    pub fn wrap(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            if current.is_empty() {
                current = self.place(word);
                continue;
            }

            let candidate = format!("{} {}", current, word);
            if self.measure.measure(&candidate) <= self.max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = self.place(word);
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    fn place(&self, word: &str) -> String {
        if self.overflow == Overflow::Ellipsis && self.measure.measure(word) > self.max_width {
            self.truncate(word)
        } else {
            word.to_string()
        }
    }

    /// Shorten an over-wide token so that it fits the budget.
    ///
    /// When the budget cannot hold a character plus the ellipsis, the longest
    /// prefix that fits is returned bare (never less than one character).
    fn truncate(&self, word: &str) -> String {
        let ellipsis_width = self.measure.measure(ELLIPSIS);

        let kept = self.prefix_len(word, self.max_width - ellipsis_width);
        if kept > 0 {
            let mut out: String = word.chars().take(kept).collect();
            out.push_str(ELLIPSIS);
            return out;
        }

        let kept = self.prefix_len(word, self.max_width).max(1);
        word.chars().take(kept).collect()
    }

    /// Number of leading characters of `word` that fit within `limit`.
    fn prefix_len(&self, word: &str, limit: f32) -> usize {
        if limit <= 0.0 {
            return 0;
        }
        let mut prefix = String::new();
        let mut count = 0;
        for c in word.chars() {
            prefix.push(c);
            if self.measure.measure(&prefix) > limit {
                break;
            }
            count += 1;
        }
        count
    }
}

/// Wrap `text` to `width` characters, keeping over-long words intact.
///
/// ```
/// use keysheet::layout::wrap_text;
///
/// assert_eq!(
///     wrap_text("Move focus to the left window", 12),
///     vec!["Move focus", "to the left", "window"]
/// );
/// ```
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    GreedyWrapper::new(&CharCount, width as f32).wrap(text)
}
