//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tscheck to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CleanSummary, CommandResult, CommandSummary, FmtSummary, InitSummary, LocaleStats,
    QuerySummary, StatsSummary,
};
use crate::catalog::Location;
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of origin references to display per issue.
const MAX_ORIGINS_DISPLAY: usize = 3;

/// Print issues in cargo-style format to stdout.
///
/// This is the main entry point for reporting. Issues are sorted and
/// displayed with severity, location, catalog line, and details.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(locale_files: usize) {
    print_success_to(locale_files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(locale_files: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} catalog {} - no issues found",
            locale_files,
            if locale_files == 1 { "file" } else { "files" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, line_text) = extract_location_info(&loc);

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);

    // Print the raw catalog line if available
    if let Some(line_text) = line_text {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            line_text,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix = if col > 1 {
            line_text.chars().take(col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    // Print the owning context name
    if let Some(context) = issue.context_name() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "context:".bold(),
            context,
            width = max_line_width
        );
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    // Print origin references if present
    let origins = issue.origins();
    if !origins.is_empty() {
        print_origins(origins, writer, max_line_width);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_origins<W: Write>(origins: &[Location], writer: &mut W, max_line_width: usize) {
    let total = origins.len();
    let display_count = total.min(MAX_ORIGINS_DISPLAY);

    for (i, origin) in origins.iter().take(display_count).enumerate() {
        let is_last = i == display_count - 1;
        let remaining = total.saturating_sub(display_count);
        let suffix = if is_last && remaining > 0 {
            format!(" (and {} more)", remaining)
        } else {
            String::new()
        };

        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}{}",
            "",
            "=".blue(),
            "origin:".bold(),
            origin,
            suffix,
            width = max_line_width
        );
    }
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn extract_location_info<'a>(
    loc: &'a ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match loc {
        ReportLocation::Entry(ctx) => (
            ctx.file_path(),
            ctx.line(),
            ctx.col(),
            ctx.line_text.as_deref(),
        ),
        ReportLocation::File { path } => (path, 0, 0, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| {
            let loc = i.location();
            match loc {
                ReportLocation::Entry(ctx) => Some(ctx.line()),
                ReportLocation::File { .. } => None,
            }
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_command_output(result);

    if matches!(result.summary, CommandSummary::Check) && result.issues.is_empty() {
        print_success(result.locale_files_checked);
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_command_output(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
        }
        CommandSummary::Stats(summary) => {
            print_stats(summary);
        }
        CommandSummary::Query(summary) => {
            print_query(summary);
        }
        CommandSummary::Fmt(summary) => {
            print_fmt(summary);
        }
        CommandSummary::Clean(summary) => {
            print_clean(summary);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn print_stats(summary: &StatsSummary) {
    print_stats_to(summary, &mut io::stdout().lock());
}

fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    let rows = &summary.rows;

    let locale_width = rows
        .iter()
        .map(|r| r.locale.len())
        .chain(["locale".len()])
        .max()
        .unwrap_or(6);
    let file_width = rows
        .iter()
        .map(|r| r.file_path.len())
        .chain(["file".len()])
        .max()
        .unwrap_or(4);

    let _ = writeln!(
        writer,
        "{:<locale_width$}  {:<file_width$}  {:>8}  {:>8}  {:>8}  {:>10}  {:>5}",
        "locale", "file", "contexts", "messages", "finished", "unfinished", "stale"
    );

    for row in rows {
        let _ = writeln!(
            writer,
            "{:<locale_width$}  {:<file_width$}  {:>8}  {:>8}  {:>8}  {:>10}  {:>5}",
            row.locale,
            row.file_path,
            row.contexts,
            row.messages,
            row.finished,
            row.unfinished,
            row.stale
        );
    }

    let total = |f: fn(&LocaleStats) -> usize| rows.iter().map(f).sum::<usize>();
    let _ = writeln!(
        writer,
        "{:<locale_width$}  {:<file_width$}  {:>8}  {:>8}  {:>8}  {:>10}  {:>5}",
        "total",
        "",
        total(|r| r.contexts),
        total(|r| r.messages),
        total(|r| r.finished),
        total(|r| r.unfinished),
        total(|r| r.stale)
    );
}

fn print_query(summary: &QuerySummary) {
    if summary.fell_back {
        eprintln!(
            "{} no '{}' translation for \"{}\" in context \"{}\"; falling back to source text",
            "warning:".bold().yellow(),
            summary.locale,
            summary.source,
            summary.context
        );
    }
    println!("{}", summary.text);
}

fn print_fmt(summary: &FmtSummary) {
    if summary.changed.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} catalog file(s) already in canonical form",
                summary.checked_count
            )
            .green()
        );
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} file(s):",
            "Rewrote".green().bold(),
            summary.changed.len()
        );
        for file in &summary.changed {
            println!("  {}", file);
        }
    } else {
        println!(
            "{} {} file(s):",
            "Would rewrite".yellow().bold(),
            summary.changed.len()
        );
        for file in &summary.changed {
            println!("  {}", file);
        }
        println!("Run with {} to rewrite these files.", "--apply".cyan());
    }
}

fn print_clean(summary: &CleanSummary) {
    if !summary.is_apply {
        for issue in &summary.vanished_issues {
            println!(
                "  {} {}:{} \"{}\" ({})",
                "-".dimmed(),
                issue.context.file_path(),
                issue.context.line(),
                issue.context.source,
                issue.context.context
            );
        }
        if !summary.vanished_issues.is_empty() {
            println!();
        }
    }

    if summary.vanished_count > 0 {
        if summary.is_apply {
            println!(
                "{} {} message(s) in {} file(s).",
                "Deleted".green().bold(),
                summary.vanished_count,
                summary.file_count
            );
        } else {
            println!(
                "{} {} message(s) in {} file(s).",
                "Would delete".yellow().bold(),
                summary.vanished_count,
                summary.file_count
            );
            println!("Run with {} to delete these messages.", "--apply".cyan());
        }
    } else {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "No vanished messages found".green()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
