//! Issue types for catalog analysis results.
//!
//! This module defines all issue types that can be detected while checking
//! translation catalogs. Each issue is self-contained with all information
//! needed by:
//! - Reporter: to display the issue to users (CLI, MCP, etc.)
//! - Commands: to summarize or act on the issue (clean, fmt, etc.)

use enum_dispatch::enum_dispatch;
use std::collections::BTreeSet;

use crate::catalog::{Location, TranslationState};
use crate::markup::MarkupError;
use crate::placeholder::format_placeholders;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingTranslation,
    OrphanTranslation,
    Untranslated,
    PlaceholderMismatch,
    MarkupMismatch,
    Unfinished,
    Vanished,
    DuplicateMessage,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::OrphanTranslation => write!(f, "orphan-translation"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::MarkupMismatch => write!(f, "markup-mismatch"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Vanished => write!(f, "vanished"),
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Locations and Entry Context
// ============================================================

/// Position information in a catalog (.ts) file.
///
/// Points at the `<message>` element an issue refers to, used for
/// clickable `file:line:col` output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CatalogLocation {
    /// Path to the catalog file (e.g., "./translations/fr.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl CatalogLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// Position with entry information in a catalog file.
///
/// Carries the message this issue refers to: its context name, source
/// text, translation text, and the raw catalog line for report excerpts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    pub location: CatalogLocation,
    /// Name of the context the message belongs to (e.g., "Dashboard").
    pub context: String,
    /// The source (primary-language) text.
    pub source: String,
    /// The translation text; empty when not yet translated.
    pub translation: String,
    /// Raw line from the catalog file, shown under the `-->` arrow.
    pub line_text: Option<String>,
}

impl EntryContext {
    pub fn new(
        location: CatalogLocation,
        context: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            location,
            context: context.into(),
            source: source.into(),
            translation: translation.into(),
            line_text: None,
        }
    }

    pub fn with_line_text(mut self, line_text: impl Into<String>) -> Self {
        self.line_text = Some(line_text.into());
        self
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

// ============================================================
// Issue Types - Completeness
// ============================================================

/// Entry in the primary locale with no counterpart in one or more
/// replica locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    pub context: EntryContext,
    /// The primary locale code (e.g., "en").
    pub primary_locale: String,
    /// Locales where this entry is missing.
    pub missing_in: Vec<String>,
    /// Origin references of the primary entry.
    pub origins: Vec<Location>,
}

impl MissingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslation
    }
}

/// Entry in a replica locale with no counterpart in the primary locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanTranslationIssue {
    pub context: EntryContext,
    /// The locale where this orphan entry exists.
    pub locale: String,
    /// The primary locale code it is absent from.
    pub primary_locale: String,
}

impl OrphanTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::OrphanTranslation
    }
}

// ============================================================
// Issue Types - Entry Content
// ============================================================

/// Finished translation identical to its source text in a replica locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: EntryContext,
    /// The locale where the text is identical to the source.
    pub locale: String,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Placeholder set differs between source and translation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: EntryContext,
    /// Placeholders found in the source text.
    pub expected: BTreeSet<u8>,
    /// Placeholders found in the translation text.
    pub found: BTreeSet<u8>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Translation text contains malformed inline markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupMismatchIssue {
    pub context: EntryContext,
    /// What went wrong while matching tags.
    pub error: MarkupError,
}

impl MarkupMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MarkupMismatch
    }
}

/// Entry still marked `unfinished`, or with an empty translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: EntryContext,
    /// The locale this entry belongs to.
    pub locale: String,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Entry whose source string disappeared from the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanishedIssue {
    pub context: EntryContext,
    /// The locale this entry belongs to.
    pub locale: String,
    /// Vanished or obsolete, as written in the file.
    pub state: TranslationState,
}

impl VanishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Vanished
    }
}

/// Same `(context, source)` pair defined more than once in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    pub context: EntryContext,
    /// Line of the first occurrence; the issue points at the duplicate.
    pub first_line: usize,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingTranslation(MissingTranslationIssue),
    OrphanTranslation(OrphanTranslationIssue),
    Untranslated(UntranslatedIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    MarkupMismatch(MarkupMismatchIssue),
    Unfinished(UnfinishedIssue),
    Vanished(VanishedIssue),
    DuplicateMessage(DuplicateMessageIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingTranslation(_) => MissingTranslationIssue::severity(),
            Issue::OrphanTranslation(_) => OrphanTranslationIssue::severity(),
            Issue::Untranslated(_) => UntranslatedIssue::severity(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
            Issue::MarkupMismatch(_) => MarkupMismatchIssue::severity(),
            Issue::Unfinished(_) => UnfinishedIssue::severity(),
            Issue::Vanished(_) => VanishedIssue::severity(),
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingTranslation(_) => MissingTranslationIssue::rule(),
            Issue::OrphanTranslation(_) => OrphanTranslationIssue::rule(),
            Issue::Untranslated(_) => UntranslatedIssue::rule(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
            Issue::MarkupMismatch(_) => MarkupMismatchIssue::rule(),
            Issue::Unfinished(_) => UnfinishedIssue::rule(),
            Issue::Vanished(_) => VanishedIssue::rule(),
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Catalog entry location (has line_text for context display).
    Entry(&'a EntryContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// This trait is implemented by all issue types to provide a consistent
/// interface for the report functions. Uses `enum_dispatch` for zero-cost
/// dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Context name for the "= context:" line.
    fn context_name(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Origin references (for missing-translation).
    fn origins(&self) -> &[Location] {
        &[]
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn context_name(&self) -> Option<&str> {
        Some(&self.context.context)
    }

    fn details(&self) -> Option<String> {
        Some(format!("missing in: {}", self.missing_in.join(", ")))
    }

    fn origins(&self) -> &[Location] {
        &self.origins
    }
}

impl Report for OrphanTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn context_name(&self) -> Option<&str> {
        Some(&self.context.context)
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {} but not in primary locale '{}'",
            self.locale, self.primary_locale
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("add the entry to the primary catalog or delete it here")
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn context_name(&self) -> Option<&str> {
        Some(&self.context.context)
    }

    fn details(&self) -> Option<String> {
        Some(format!("identical to source in {}", self.locale))
    }

    fn hint(&self) -> Option<&str> {
        Some("intentionally identical texts can be listed in ignoreTexts")
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn context_name(&self) -> Option<&str> {
        Some(&self.context.context)
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "source has {}, translation has {}",
            format_placeholders(&self.expected),
            format_placeholders(&self.found)
        ))
    }
}

impl Report for MarkupMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn context_name(&self) -> Option<&str> {
        Some(&self.context.context)
    }

    fn details(&self) -> Option<String> {
        Some(self.error.to_string())
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn context_name(&self) -> Option<&str> {
        Some(&self.context.context)
    }

    fn details(&self) -> Option<String> {
        if self.context.translation.is_empty() {
            Some(format!("no translation yet in {}", self.locale))
        } else {
            Some(format!(
                "draft translation in {} (\"{}\")",
                self.locale, self.context.translation
            ))
        }
    }
}

impl Report for VanishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn context_name(&self) -> Option<&str> {
        Some(&self.context.context)
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "marked {} in {}",
            self.state.as_attr().unwrap_or("vanished"),
            self.locale
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("remove stale entries with 'tscheck clean --apply'")
    }
}

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn context_name(&self) -> Option<&str> {
        Some(&self.context.context)
    }

    fn details(&self) -> Option<String> {
        Some(format!("first defined at line {}", self.first_line))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    /// Get file path for sorting.
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Entry(ctx) => &ctx.location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    /// Get line number for sorting.
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Entry(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    /// Get column number for sorting.
    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Entry(ctx) => ctx.location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
