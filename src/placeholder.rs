//! Positional placeholder (`%1`, `%2`, ...) extraction and comparison.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

// Qt positional markers run %1 through %99; a third digit is literal text,
// so "%100" reads as marker %10 followed by '0'.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(\d{1,2})").unwrap());

/// The set of positional markers in a string, as marker numbers.
///
/// A set, not a sequence: translations may legitimately reorder markers
/// (`%2 sur %1`), and repeating a marker is allowed. Sorted output keeps
/// report text stable.
pub fn extract_placeholders(text: &str) -> BTreeSet<u8> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|c| c[1].parse::<u8>().ok())
        .collect()
}

/// Render a marker set for diagnostics, e.g. `%1, %2`.
pub fn format_placeholders(placeholders: &BTreeSet<u8>) -> String {
    if placeholders.is_empty() {
        return "none".to_string();
    }
    placeholders
        .iter()
        .map(|n| format!("%{}", n))
        .collect::<Vec<_>>()
        .join(", ")
}
