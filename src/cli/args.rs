//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all tscheck
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (missing translations, placeholders, etc.)
//! - `stats`: Print per-locale catalog statistics
//! - `query`: Resolve one source string through a locale's translation table
//! - `fmt`: Rewrite catalogs into the canonical serialization
//! - `clean`: Remove vanished and obsolete messages
//! - `init`: Initialize tscheck configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.args.common.verbose,
            Some(Command::Query(cmd)) => cmd.args.common.verbose,
            Some(Command::Fmt(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all catalog commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Primary locale (overrides config file)
    #[arg(long, env = "TSCHECK_PRIMARY_LOCALE")]
    pub primary_locale: Option<String>,

    /// Project root directory to search for the config file
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Translations directory path (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub args: StatsArgs,
}

#[derive(Debug, Parser)]
pub struct QueryArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Locale to resolve against (e.g. fr)
    #[arg(long)]
    pub locale: String,
}

#[derive(Debug, Args)]
pub struct QueryCommand {
    /// Context name (e.g. "Dashboard")
    pub context: String,

    /// Source text to resolve
    pub source: String,

    #[command(flatten)]
    pub args: QueryArgs,
}

#[derive(Debug, Parser)]
pub struct FmtArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    #[command(flatten)]
    pub args: FmtArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually delete messages (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (missing translations, placeholder mismatches, ...)
    Check(CheckCommand),
    /// Print per-locale catalog statistics
    Stats(StatsCommand),
    /// Resolve a (context, source) pair through a locale's translation table
    Query(QueryCommand),
    /// Rewrite catalog files into the canonical serialization
    Fmt(FmtCommand),
    /// Remove vanished and obsolete messages from catalog files
    Clean(CleanCommand),
    /// Initialize a new .tscheckrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
