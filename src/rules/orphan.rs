//! Orphan translation detection rule.
//!
//! Detects entries that exist in replica locale catalogs but are missing
//! from the primary locale. These are typically leftovers from strings that
//! were removed from the host application without rerunning lupdate on
//! every catalog.

use crate::{
    catalog::AllCatalogs,
    context::CheckContext,
    issues::OrphanTranslationIssue,
    rules::helpers::{entry_context, replica_catalogs},
};

pub fn check_orphan_translation_issues(ctx: &CheckContext) -> Vec<OrphanTranslationIssue> {
    check_orphan_translations(&ctx.config.primary_locale, &ctx.catalogs)
}

/// Check for orphan translations.
///
/// Finds all `(context, source)` pairs in replica locales that are absent
/// from the primary locale catalog.
///
/// # Arguments
/// * `primary_locale` - The primary locale code (e.g., "en")
/// * `catalogs` - All loaded catalogs, keyed by locale
///
/// # Returns
/// Vector of OrphanTranslationIssue for entries absent from the primary
pub fn check_orphan_translations(
    primary_locale: &str,
    catalogs: &AllCatalogs,
) -> Vec<OrphanTranslationIssue> {
    let Some(primary) = catalogs.get(primary_locale) else {
        return Vec::new();
    };

    let mut issues = Vec::new();

    for catalog in replica_catalogs(catalogs, primary_locale) {
        for (context_name, message) in catalog.document.messages() {
            if primary.contains(context_name, &message.source) {
                continue;
            }

            issues.push(OrphanTranslationIssue {
                context: entry_context(catalog, context_name, message),
                locale: catalog.locale.clone(),
                primary_locale: primary_locale.to_string(),
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
