//! Vanished entry detection rule.
//!
//! Detects entries marked `vanished` or `obsolete`: their source string no
//! longer exists in the host application, so the catalog entry is dead
//! weight. The `clean` command removes them.

use crate::{
    catalog::AllCatalogs,
    context::CheckContext,
    issues::VanishedIssue,
    rules::helpers::{entry_context, sorted_catalogs},
};

pub fn check_vanished_issues(ctx: &CheckContext) -> Vec<VanishedIssue> {
    check_vanished(&ctx.catalogs)
}

/// Check for vanished and obsolete entries in every catalog.
///
/// # Arguments
/// * `catalogs` - All loaded catalogs, keyed by locale
///
/// # Returns
/// Vector of VanishedIssue for stale entries
pub fn check_vanished(catalogs: &AllCatalogs) -> Vec<VanishedIssue> {
    let mut issues = Vec::new();

    for catalog in sorted_catalogs(catalogs) {
        for (context_name, message) in catalog.document.messages() {
            if !message.is_stale() {
                continue;
            }

            issues.push(VanishedIssue {
                context: entry_context(catalog, context_name, message),
                locale: catalog.locale.clone(),
                state: message.translation.state,
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
