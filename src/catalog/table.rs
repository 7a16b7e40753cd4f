use std::collections::HashMap;

use super::document::Document;

/// Exact-match lookup table over one locale's catalog.
///
/// This is the whole consumer side of the format: a dictionary keyed by
/// `(context, source_text)` returning `translation_text`, falling back to
/// the source string when no usable translation exists. Vanished/obsolete
/// entries and empty translations are excluded so a stale or unfinished
/// catalog degrades to source text instead of blank labels.
#[derive(Debug, Default)]
pub struct TranslationTable {
    entries: HashMap<(String, String), String>,
}

impl TranslationTable {
    pub fn from_document(doc: &Document) -> Self {
        let mut entries = HashMap::new();
        for (context, message) in doc.messages() {
            if message.is_stale() || message.translation.text.is_empty() {
                continue;
            }
            // First occurrence wins when a catalog violates uniqueness.
            entries
                .entry((context.to_string(), message.source.clone()))
                .or_insert_with(|| message.translation.text.clone());
        }
        Self { entries }
    }

    pub fn lookup(&self, context: &str, source: &str) -> Option<&str> {
        self.entries
            .get(&(context.to_string(), source.to_string()))
            .map(String::as_str)
    }

    /// Resolve a string, falling back to the source text when the catalog
    /// has no usable translation for it.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.lookup(context, source).unwrap_or(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
