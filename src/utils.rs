//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use tscheck::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Refresh"));
/// assert!(contains_alphabetic("Qualité"));
/// assert!(contains_alphabetic("mg/L"));
/// assert!(!contains_alphabetic("7.2"));
/// assert!(!contains_alphabetic("%1 : %2"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}
