use crate::issues::{Issue, VanishedIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Stats(StatsSummary),
    Query(QuerySummary),
    Fmt(FmtSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

/// One row of the `stats` table.
#[derive(Debug)]
pub struct LocaleStats {
    pub locale: String,
    pub file_path: String,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub stale: usize,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub rows: Vec<LocaleStats>,
}

#[derive(Debug)]
pub struct QuerySummary {
    pub locale: String,
    pub context: String,
    pub source: String,
    /// Resolved text; equals `source` when the lookup fell back.
    pub text: String,
    pub fell_back: bool,
}

#[derive(Debug)]
pub struct FmtSummary {
    /// Files whose bytes differ from the canonical serialization.
    pub changed: Vec<String>,
    pub checked_count: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub vanished_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    pub vanished_issues: Vec<VanishedIssue>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running tscheck commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of catalog files that failed to parse.
    pub parse_error_count: usize,
    /// Number of locale catalog files (.ts) that were checked.
    pub locale_files_checked: usize,
}
