use anyhow::{Result, bail};

use super::super::args::QueryCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary, QuerySummary},
};

use crate::{catalog::TranslationTable, context::CheckContext};

pub fn query(cmd: QueryCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;
    let locale = &cmd.args.locale;

    let Some(catalog) = ctx.catalogs.get(locale) else {
        bail!(
            "Locale '{}' not found in '{}' (available: {})",
            locale,
            ctx.resolved_translations_dir().display(),
            ctx.locales().join(", ")
        );
    };

    let table = TranslationTable::from_document(&catalog.document);
    let resolved = table.lookup(&cmd.context, &cmd.source);
    let fell_back = resolved.is_none();
    let text = resolved.unwrap_or(&cmd.source).to_string();

    Ok(finish(
        CommandSummary::Query(QuerySummary {
            locale: locale.clone(),
            context: cmd.context,
            source: cmd.source,
            text,
            fell_back,
        }),
        Vec::new(),
        ctx.catalogs.len(),
        true,
    ))
}
