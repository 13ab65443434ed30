//! Compact key-combination notation.

use regex::Regex;
use std::sync::LazyLock;

/// Modifier rewrite rules, applied in order.
///
/// Each pattern matches the modifier name, optional whitespace, a literal
/// `+` and optional whitespace.
static MODIFIER_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("Super", "S-"),
        ("Ctrl", "C-"),
        ("Alt", "A-"),
        ("Shift", "Sh-"),
        ("CapsLock", "CL-"),
    ]
    .into_iter()
    .map(|(name, short)| {
        let re = Regex::new(&format!(r"{}\s*\+\s*", name)).expect("modifier pattern is valid");
        (re, short)
    })
    .collect()
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Rewrite modifier names in a chord to short codes and drop all whitespace.
///
/// ```
/// use keysheet::layout::abbreviate_keys;
///
/// assert_eq!(abbreviate_keys("Super + Shift + Q"), "S-Sh-Q");
/// assert_eq!(abbreviate_keys("Ctrl+Alt+T"), "C-A-T");
/// ```
pub fn abbreviate_keys(keys: &str) -> String {
    let mut result = keys.to_string();
    for (re, short) in MODIFIER_RULES.iter() {
        result = re.replace_all(&result, *short).into_owned();
    }
    WHITESPACE.replace_all(&result, "").into_owned()
}
