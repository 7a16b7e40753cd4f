//! Placeholder parity rule.
//!
//! Detects translations whose set of `%N` positional placeholders differs
//! from the source text. Order is allowed to differ (languages reorder
//! arguments); presence is not.

use crate::{
    catalog::AllCatalogs,
    context::CheckContext,
    issues::PlaceholderMismatchIssue,
    placeholder::extract_placeholders,
    rules::helpers::{entry_context, sorted_catalogs},
};

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    check_placeholders(&ctx.catalogs)
}

/// Check placeholder parity between source and translation texts.
///
/// Applies to non-empty, non-stale translations in every catalog. Empty
/// translations are the unfinished rule's business; stale entries are the
/// vanished rule's.
///
/// # Arguments
/// * `catalogs` - All loaded catalogs, keyed by locale
///
/// # Returns
/// Vector of PlaceholderMismatchIssue where the `%N` sets differ
pub fn check_placeholders(catalogs: &AllCatalogs) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for catalog in sorted_catalogs(catalogs) {
        for (context_name, message) in catalog.document.messages() {
            if message.is_stale() || message.translation.text.is_empty() {
                continue;
            }

            let expected = extract_placeholders(&message.source);
            let found = extract_placeholders(&message.translation.text);
            if expected == found {
                continue;
            }

            issues.push(PlaceholderMismatchIssue {
                context: entry_context(catalog, context_name, message),
                expected,
                found,
            });
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
