use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    context::CheckContext,
    issues::Issue,
    rules::{
        duplicate::check_duplicate_message_issues, markup::check_markup_issues,
        missing::check_missing_translation_issues, orphan::check_orphan_translation_issues,
        placeholders::check_placeholder_issues, unfinished::check_unfinished_issues,
        untranslated::check_untranslated_issues, vanished::check_vanished_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Missing,
    Orphan,
    Untranslated,
    Placeholders,
    Markup,
    Unfinished,
    Duplicate,
    Vanished,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Missing,
            CheckRule::Orphan,
            CheckRule::Untranslated,
            CheckRule::Placeholders,
            CheckRule::Markup,
            CheckRule::Unfinished,
            CheckRule::Duplicate,
            CheckRule::Vanished,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let rules = &cmd.rules;
    let ctx = CheckContext::new(&args.common)?;

    let rules = if rules.is_empty() {
        CheckRule::all()
    } else {
        rules.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for rule in rules {
        match rule {
            CheckRule::Missing => {
                let issues = check_missing_translation_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::MissingTranslation));
            }
            CheckRule::Orphan => {
                let issues = check_orphan_translation_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::OrphanTranslation));
            }
            CheckRule::Untranslated => {
                let issues = check_untranslated_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
            CheckRule::Placeholders => {
                let issues = check_placeholder_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::Markup => {
                let issues = check_markup_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::MarkupMismatch));
            }
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_message_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateMessage));
            }
            CheckRule::Vanished => {
                let issues = check_vanished_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Vanished));
            }
        }
    }

    let parse_errors = ctx.catalog_parse_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.catalogs.len(),
        true,
    ))
}
