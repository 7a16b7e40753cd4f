//! Inline markup scanning for translated strings.
//!
//! Catalog text may embed rich-text tags (`<a href='…'>`, `<p style='…'>`)
//! that the host's text widget renders verbatim. The checker only cares
//! that tags are balanced; it never interprets attributes or content.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// Captures: optional closing slash, tag name, attribute text, optional
// self-closing slash.
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9-]*)([^<>]*?)(/?)>").unwrap());

/// Elements that never take a closing tag in rich text.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// An opening tag was never closed.
    Unclosed(String),
    /// A closing tag appeared with nothing open.
    UnexpectedClosing(String),
    /// A closing tag did not match the innermost open tag.
    Mismatched { found: String, expected: String },
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::Unclosed(tag) => write!(f, "unclosed <{}> tag", tag),
            MarkupError::UnexpectedClosing(tag) => {
                write!(f, "unexpected closing </{}> tag", tag)
            }
            MarkupError::Mismatched { found, expected } => {
                write!(
                    f,
                    "mismatched closing </{}> tag, expected </{}>",
                    found, expected
                )
            }
        }
    }
}

/// Whether the text contains any markup tags at all.
pub fn contains_markup(text: &str) -> bool {
    TAG_REGEX.is_match(text)
}

/// Check that every tag in the text is properly opened and closed.
///
/// Tag names are matched case-insensitively; void elements (`<br>`) need
/// no closer and stray closers for them are ignored.
pub fn check_markup(text: &str) -> Result<(), MarkupError> {
    let mut stack: Vec<String> = Vec::new();

    for cap in TAG_REGEX.captures_iter(text) {
        let closing = !cap[1].is_empty();
        let name = cap[2].to_ascii_lowercase();
        let self_closing = !cap[4].is_empty();

        if VOID_ELEMENTS.contains(&name.as_str()) {
            continue;
        }

        if closing {
            match stack.pop() {
                None => return Err(MarkupError::UnexpectedClosing(name)),
                Some(open) if open != name => {
                    return Err(MarkupError::Mismatched {
                        found: name,
                        expected: open,
                    });
                }
                Some(_) => {}
            }
        } else if !self_closing {
            stack.push(name);
        }
    }

    match stack.pop() {
        Some(open) => Err(MarkupError::Unclosed(open)),
        None => Ok(()),
    }
}
