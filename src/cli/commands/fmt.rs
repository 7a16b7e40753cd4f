use std::fs;

use anyhow::{Context as _, Result};

use super::super::args::FmtCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary, FmtSummary},
};

use crate::{catalog::write_ts, context::CheckContext, rules::sorted_catalogs};

pub fn fmt(cmd: FmtCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;
    let is_apply = cmd.args.apply;

    let mut changed = Vec::new();

    for catalog in sorted_catalogs(&ctx.catalogs) {
        let canonical = write_ts(&catalog.document);
        let current = fs::read_to_string(&catalog.file_path)
            .with_context(|| format!("Failed to read catalog file: {}", catalog.file_path))?;

        if current != canonical {
            if is_apply {
                fs::write(&catalog.file_path, canonical)
                    .with_context(|| format!("Failed to write catalog file: {}", catalog.file_path))?;
            }
            changed.push(catalog.file_path.clone());
        }
    }

    Ok(finish(
        CommandSummary::Fmt(FmtSummary {
            changed,
            checked_count: ctx.catalogs.len(),
            is_apply,
        }),
        Vec::new(),
        ctx.catalogs.len(),
        false,
    ))
}
