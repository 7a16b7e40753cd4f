//! Duplicate message detection rule.
//!
//! Detects `(context, source)` pairs defined more than once in the same
//! catalog file. Lookup keys must be unique: the loader keeps the first
//! occurrence and silently shadows the rest, so duplicates are always a
//! merge accident worth fixing.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{
    catalog::AllCatalogs,
    context::CheckContext,
    issues::DuplicateMessageIssue,
    rules::helpers::{entry_context, sorted_catalogs},
};

pub fn check_duplicate_message_issues(ctx: &CheckContext) -> Vec<DuplicateMessageIssue> {
    check_duplicate_messages(&ctx.catalogs)
}

/// Check for duplicate `(context, source)` pairs within each file.
///
/// The issue points at the later occurrence and records the line of the
/// first, which is the one the loader actually uses. Two sibling
/// `<context>` blocks with the same name count as one namespace.
///
/// # Arguments
/// * `catalogs` - All loaded catalogs, keyed by locale
///
/// # Returns
/// Vector of DuplicateMessageIssue for repeated lookup keys
pub fn check_duplicate_messages(catalogs: &AllCatalogs) -> Vec<DuplicateMessageIssue> {
    let mut issues = Vec::new();

    for catalog in sorted_catalogs(catalogs) {
        let mut seen: HashMap<(&str, &str), usize> = HashMap::new();

        for context in &catalog.document.contexts {
            for message in &context.messages {
                match seen.entry((context.name.as_str(), message.source.as_str())) {
                    Entry::Occupied(first) => {
                        issues.push(DuplicateMessageIssue {
                            context: entry_context(catalog, &context.name, message),
                            first_line: *first.get(),
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(message.line);
                    }
                }
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
