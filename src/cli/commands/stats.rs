use anyhow::Result;

use super::super::args::StatsCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary, LocaleStats, StatsSummary},
};

use crate::{
    catalog::TranslationState, context::CheckContext, issues::Issue, rules::sorted_catalogs,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let mut rows = Vec::new();

    for catalog in sorted_catalogs(&ctx.catalogs) {
        let mut finished = 0;
        let mut unfinished = 0;
        let mut stale = 0;

        for (_, message) in catalog.document.messages() {
            if message.is_stale() {
                stale += 1;
            } else if message.translation.state == TranslationState::Unfinished
                || message.translation.text.is_empty()
            {
                unfinished += 1;
            } else {
                finished += 1;
            }
        }

        rows.push(LocaleStats {
            locale: catalog.locale.clone(),
            file_path: catalog.file_path.clone(),
            contexts: catalog.document.contexts.len(),
            messages: catalog.document.message_count(),
            finished,
            unfinished,
            stale,
        });
    }

    // Parse failures still surface as a warning, but stats is informational
    // and never fails the run.
    let issues: Vec<Issue> = ctx
        .catalog_parse_errors()
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary { rows }),
        issues,
        ctx.catalogs.len(),
        false,
    ))
}
