//! Unfinished translation detection rule.
//!
//! Detects entries still marked `type="unfinished"` and entries whose
//! translation text is empty. Both render as the raw source string at
//! runtime, which is exactly what the fallback policy papers over.

use crate::{
    catalog::{AllCatalogs, TranslationState},
    context::CheckContext,
    issues::UnfinishedIssue,
    rules::helpers::{entry_context, sorted_catalogs},
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    check_unfinished(&ctx.catalogs)
}

/// Check for unfinished entries.
///
/// Flags entries marked unfinished and finished entries with empty text,
/// in every catalog including the primary. Stale entries are skipped.
///
/// # Arguments
/// * `catalogs` - All loaded catalogs, keyed by locale
///
/// # Returns
/// Vector of UnfinishedIssue for entries that still need translator work
pub fn check_unfinished(catalogs: &AllCatalogs) -> Vec<UnfinishedIssue> {
    let mut issues = Vec::new();

    for catalog in sorted_catalogs(catalogs) {
        for (context_name, message) in catalog.document.messages() {
            if message.is_stale() {
                continue;
            }

            let unfinished = message.translation.state == TranslationState::Unfinished
                || message.translation.text.is_empty();
            if !unfinished {
                continue;
            }

            issues.push(UnfinishedIssue {
                context: entry_context(catalog, context_name, message),
                locale: catalog.locale.clone(),
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
