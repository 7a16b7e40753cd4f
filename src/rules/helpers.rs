//! Shared helper functions for rule implementations.

use crate::catalog::{AllCatalogs, LocaleCatalog, Message};
use crate::issues::{CatalogLocation, EntryContext};

/// Build an [`EntryContext`] pointing at a message in a loaded catalog.
///
/// The column is the first non-blank character of the raw line, so the
/// report caret lands on the `<message>` tag instead of column 1.
pub fn entry_context(
    catalog: &LocaleCatalog,
    context_name: &str,
    message: &Message,
) -> EntryContext {
    let line_text = catalog.line_text(message.line);
    let col = line_text
        .map(|text| text.len() - text.trim_start().len() + 1)
        .unwrap_or(1);

    let entry = EntryContext::new(
        CatalogLocation::new(&catalog.file_path, message.line, col),
        context_name,
        &message.source,
        &message.translation.text,
    );
    match line_text {
        Some(text) => entry.with_line_text(text),
        None => entry,
    }
}

/// All catalogs sorted by locale, for deterministic iteration.
pub fn sorted_catalogs(catalogs: &AllCatalogs) -> Vec<&LocaleCatalog> {
    let mut sorted: Vec<&LocaleCatalog> = catalogs.values().collect();
    sorted.sort_by(|a, b| a.locale.cmp(&b.locale));
    sorted
}

/// Catalogs other than the primary locale, sorted by locale.
pub fn replica_catalogs<'a>(
    catalogs: &'a AllCatalogs,
    primary_locale: &str,
) -> Vec<&'a LocaleCatalog> {
    let mut replicas: Vec<&LocaleCatalog> = catalogs
        .values()
        .filter(|catalog| catalog.locale != primary_locale)
        .collect();
    replicas.sort_by(|a, b| a.locale.cmp(&b.locale));
    replicas
}
