//! Missing translation detection rule.
//!
//! Detects entries that exist in the primary locale catalog but are missing
//! from one or more replica locale catalogs.

use crate::{
    catalog::AllCatalogs,
    context::CheckContext,
    issues::MissingTranslationIssue,
    rules::helpers::entry_context,
};

pub fn check_missing_translation_issues(ctx: &CheckContext) -> Vec<MissingTranslationIssue> {
    check_missing_translations(&ctx.config.primary_locale, &ctx.catalogs)
}

/// Check for missing translations.
///
/// Finds all `(context, source)` pairs in the primary locale that are absent
/// from other locales. State does not matter here: a vanished replica copy
/// still counts as present, staleness is the vanished rule's job.
///
/// # Arguments
/// * `primary_locale` - The primary locale code (e.g., "en")
/// * `catalogs` - All loaded catalogs, keyed by locale
///
/// # Returns
/// Vector of MissingTranslationIssue for entries missing in other locales
pub fn check_missing_translations(
    primary_locale: &str,
    catalogs: &AllCatalogs,
) -> Vec<MissingTranslationIssue> {
    let Some(primary) = catalogs.get(primary_locale) else {
        return Vec::new();
    };

    let mut issues = Vec::new();

    for context in &primary.document.contexts {
        for message in &context.messages {
            let mut missing_in: Vec<String> = catalogs
                .values()
                .filter(|catalog| {
                    catalog.locale != primary_locale
                        && !catalog.contains(&context.name, &message.source)
                })
                .map(|catalog| catalog.locale.clone())
                .collect();
            missing_in.sort();

            if missing_in.is_empty() {
                continue;
            }

            issues.push(MissingTranslationIssue {
                context: entry_context(primary, &context.name, message),
                primary_locale: primary_locale.to_string(),
                missing_in,
                origins: message.locations.clone(),
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
