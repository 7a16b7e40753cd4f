//! Untranslated value detection rule.
//!
//! Detects finished translations in replica locales whose text is identical
//! to the source, which usually means the text was copied through without
//! being translated.
//!
//! Texts with no alphabetic characters (numbers, separators) and texts
//! listed in the config's `ignoreTexts` are skipped: those are identical in
//! every locale by design.

use std::collections::HashSet;

use crate::{
    catalog::{AllCatalogs, TranslationState},
    context::CheckContext,
    issues::UntranslatedIssue,
    rules::helpers::{entry_context, replica_catalogs},
    utils::contains_alphabetic,
};

pub fn check_untranslated_issues(ctx: &CheckContext) -> Vec<UntranslatedIssue> {
    check_untranslated(&ctx.config.primary_locale, &ctx.catalogs, &ctx.ignore_texts)
}

/// Check for untranslated values.
///
/// Finds finished entries in replica locales whose translation text equals
/// the source text. Unfinished entries are skipped (the unfinished rule owns
/// those), as are stale entries.
///
/// # Arguments
/// * `primary_locale` - The primary locale code (e.g., "en")
/// * `catalogs` - All loaded catalogs, keyed by locale
/// * `ignore_texts` - Source texts that are intentionally identical everywhere
///
/// # Returns
/// Vector of UntranslatedIssue for suspicious identical texts
pub fn check_untranslated(
    primary_locale: &str,
    catalogs: &AllCatalogs,
    ignore_texts: &HashSet<String>,
) -> Vec<UntranslatedIssue> {
    let mut issues = Vec::new();

    for catalog in replica_catalogs(catalogs, primary_locale) {
        for (context_name, message) in catalog.document.messages() {
            if message.translation.state != TranslationState::Finished {
                continue;
            }
            if message.translation.text != message.source {
                continue;
            }
            // Pure numbers and symbols look the same in every language
            if !contains_alphabetic(&message.source) {
                continue;
            }
            if ignore_texts.contains(&message.source) {
                continue;
            }

            issues.push(UntranslatedIssue {
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
