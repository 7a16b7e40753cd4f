//! Markup well-formedness rule.
//!
//! Detects translations with unbalanced or malformed inline rich-text
//! markup. The host renders translation text as rich text, so an unclosed
//! `<b>` in one locale breaks the styling of everything after it.

use crate::{
    catalog::AllCatalogs,
    context::CheckContext,
    issues::MarkupMismatchIssue,
    markup::{check_markup, contains_markup},
    rules::helpers::{entry_context, sorted_catalogs},
};

pub fn check_markup_issues(ctx: &CheckContext) -> Vec<MarkupMismatchIssue> {
    check_translation_markup(&ctx.catalogs)
}

/// Check that translation markup is well-formed.
///
/// Applies to non-empty, non-stale translations whose source or translation
/// contains tags. Plain-text entries are never scanned, so stray `<` in
/// ordinary prose cannot false-positive.
///
/// # Arguments
/// * `catalogs` - All loaded catalogs, keyed by locale
///
/// # Returns
/// Vector of MarkupMismatchIssue for malformed translation markup
pub fn check_translation_markup(catalogs: &AllCatalogs) -> Vec<MarkupMismatchIssue> {
    let mut issues = Vec::new();

    for catalog in sorted_catalogs(catalogs) {
        for (context_name, message) in catalog.document.messages() {
            if message.is_stale() || message.translation.text.is_empty() {
                continue;
            }
            if !contains_markup(&message.source) && !contains_markup(&message.translation.text) {
                continue;
            }

            if let Err(error) = check_markup(&message.translation.text) {
                issues.push(MarkupMismatchIssue {
                    context: entry_context(catalog, context_name, message),
                    error,
                });
            }
        }
    }

    // Sort by file path, then line for deterministic output
    issues.sort_by(|a, b| {
        a.context
            .location
            .file_path
            .cmp(&b.context.location.file_path)
            .then_with(|| a.context.location.line.cmp(&b.context.location.line))
            .then_with(|| a.context.context.cmp(&b.context.context))
            .then_with(|| a.context.source.cmp(&b.context.source))
    });

    issues
}
