//! Qt Linguist TS catalogs: data model, reader/writer, discovery, lookup.

pub mod document;
pub mod reader;
pub mod scan;
pub mod table;
pub mod writer;

pub use document::{Context, Document, Location, Message, Translation, TranslationState};
pub use reader::{parse_ts, parse_ts_file};
pub use scan::{extract_locale, scan_catalog_files};
pub use table::TranslationTable;
pub use writer::{write_ts, write_ts_file};

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

/// All loaded catalogs, keyed by locale.
pub type AllCatalogs = HashMap<String, LocaleCatalog>;

/// A parsed catalog together with where it came from.
///
/// Keeps the raw file lines for diagnostics and a first-wins index over
/// `(context, source)` for exact-match membership tests.
#[derive(Debug)]
pub struct LocaleCatalog {
    /// Locale identifier, taken from the file stem (`fr.ts` -> `fr`).
    pub locale: String,
    pub file_path: String,
    pub document: Document,
    lines: Vec<String>,
    index: HashMap<(String, String), (usize, usize)>,
}

impl LocaleCatalog {
    pub fn new(
        locale: impl Into<String>,
        file_path: impl Into<String>,
        document: Document,
        content: &str,
    ) -> Self {
        let mut index = HashMap::new();
        for (context_idx, context) in document.contexts.iter().enumerate() {
            for (message_idx, message) in context.messages.iter().enumerate() {
                index
                    .entry((context.name.clone(), message.source.clone()))
                    .or_insert((context_idx, message_idx));
            }
        }
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            document,
            lines: content.lines().map(str::to_string).collect(),
            index,
        }
    }

    /// Read and parse one catalog file, deriving the locale from its stem.
    pub fn load(path: &Path) -> Result<Self> {
        let locale = extract_locale(path)
            .with_context(|| format!("Cannot determine locale from file name: {:?}", path))?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
        let document = parse_ts(&content)
            .with_context(|| format!("Failed to parse catalog file: {:?}", path))?;
        Ok(Self::new(
            locale,
            path.to_string_lossy().to_string(),
            document,
            &content,
        ))
    }

    /// First message matching `(context, source)`, if any.
    pub fn get(&self, context: &str, source: &str) -> Option<&Message> {
        let (context_idx, message_idx) = self
            .index
            .get(&(context.to_string(), source.to_string()))?;
        Some(&self.document.contexts[*context_idx].messages[*message_idx])
    }

    pub fn contains(&self, context: &str, source: &str) -> bool {
        self.index
            .contains_key(&(context.to_string(), source.to_string()))
    }

    /// Raw text of a 1-based line in the catalog file, for report excerpts.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        self.lines.get(line - 1).map(String::as_str)
    }

    pub fn message_count(&self) -> usize {
        self.document.message_count()
    }

    pub fn context_count(&self) -> usize {
        self.document.contexts.len()
    }
}
