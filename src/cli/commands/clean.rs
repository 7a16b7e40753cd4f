use std::path::Path;

use anyhow::Result;

use super::super::args::CleanCommand;
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{
    catalog::{Document, write_ts_file},
    context::CheckContext,
    rules::{sorted_catalogs, vanished::check_vanished},
};

/// Remove vanished and obsolete messages from catalog files.
///
/// Contexts emptied by the removal are dropped as well. Dry run by
/// default; `--apply` rewrites the affected files in canonical form.
pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;
    let is_apply = cmd.args.apply;

    let vanished_issues = check_vanished(&ctx.catalogs);

    let mut file_count = 0;

    for catalog in sorted_catalogs(&ctx.catalogs) {
        let cleaned = strip_stale_messages(&catalog.document);
        if cleaned.message_count() == catalog.document.message_count() {
            continue;
        }

        file_count += 1;
        if is_apply {
            write_ts_file(Path::new(&catalog.file_path), &cleaned)?;
        }
    }

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            vanished_count: vanished_issues.len(),
            file_count,
            is_apply,
            vanished_issues,
        }),
        Vec::new(),
        ctx.catalogs.len(),
        false,
    ))
}

fn strip_stale_messages(document: &Document) -> Document {
    let mut cleaned = document.clone();
    for context in &mut cleaned.contexts {
        context.messages.retain(|message| !message.is_stale());
    }
    cleaned.contexts.retain(|context| !context.messages.is_empty());
    cleaned
}
