//! Shared context for catalog commands.
//!
//! `CheckContext` loads configuration, discovers and parses every catalog
//! under the translations root, and hands the result to commands and rules.

use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow, bail};
use rayon::prelude::*;

use crate::{
    catalog::{AllCatalogs, LocaleCatalog, scan_catalog_files},
    cli::args::CommonArgs,
    config::{Config, load_config},
    issues::ParseErrorIssue,
};

/// Loaded state shared by all catalog commands.
///
/// # Configuration Priority
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--primary-locale en`)
/// 2. `.tscheckrc.json` config file
/// 3. Built-in defaults
#[derive(Debug)]
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// All parsed catalogs, keyed by locale.
    pub catalogs: AllCatalogs,

    /// Source texts the untranslated rule skips (from config `ignoreTexts`).
    pub ignore_texts: HashSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Parse errors from catalog files (collected during context creation).
    catalog_parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// This constructor:
    /// 1. Loads configuration (CLI args > config file > defaults)
    /// 2. Scans the translations root for `*.ts` catalog files
    /// 3. Parses all catalogs in parallel
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Translations directory doesn't exist
    /// - The primary locale catalog is absent or unparseable
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        // Priority: CLI --path arg > current directory
        let root_dir = common_args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;

        // In verbose mode, inform user if using default config
        if verbose && !config_result.from_file {
            eprintln!("Note: No .tscheckrc.json found, using default configuration");
        }

        let mut config = config_result.config;

        // Apply CLI overrides (CLI > config file > defaults)
        if let Some(ref primary_locale) = common_args.primary_locale {
            config.primary_locale = primary_locale.clone();
        }

        if let Some(ref translations_root) = common_args.translations_root {
            config.translations_root = translations_root.to_string_lossy().to_string();
        }

        let translations_dir = resolve_dir(&root_dir, &config.translations_root);

        let files = scan_catalog_files(&translations_dir, &config.ignores)?;

        // Parallel read and parse, sequential merge
        let load_results: Vec<_> = files
            .par_iter()
            .map(|file| (file, LocaleCatalog::load(file)))
            .collect();

        let mut catalogs = AllCatalogs::new();
        let mut catalog_parse_errors = Vec::new();

        for (file, result) in load_results {
            match result {
                Ok(catalog) => {
                    // Scan order is sorted, so the first stem wins deterministically
                    catalogs
                        .entry(catalog.locale.clone())
                        .or_insert(catalog);
                }
                Err(e) => {
                    if verbose {
                        eprintln!("Warning: {} - {:#}", file.display(), e);
                    }
                    catalog_parse_errors.push(ParseErrorIssue {
                        file_path: file.to_string_lossy().to_string(),
                        error: format!("{e:#}"),
                    });
                }
            }
        }

        if !catalogs.contains_key(&config.primary_locale) {
            let primary_stem = config.primary_locale.as_str();
            if let Some(err) = catalog_parse_errors.iter().find(|e| {
                Path::new(&e.file_path).file_stem().and_then(|s| s.to_str()) == Some(primary_stem)
            }) {
                bail!("Failed to parse primary locale catalog: {}", err.error);
            }
            bail!(
                "Primary locale '{}' catalog not found in '{}'",
                config.primary_locale,
                translations_dir.display()
            );
        }

        let ignore_texts = config.ignore_texts.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir,
            catalogs,
            ignore_texts,
            verbose,
            catalog_parse_errors,
        })
    }

    /// Get parse errors from catalog files.
    ///
    /// Collected during context initialization; a file that failed to parse
    /// has no entry in `catalogs`.
    pub fn catalog_parse_errors(&self) -> &Vec<ParseErrorIssue> {
        &self.catalog_parse_errors
    }

    /// Locales of all loaded catalogs, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.catalogs.keys().map(|l| l.as_str()).collect();
        locales.sort_unstable();
        locales
    }

    /// Resolve the translations directory path relative to root_dir.
    pub fn resolved_translations_dir(&self) -> PathBuf {
        resolve_dir(&self.root_dir, &self.config.translations_root)
    }
}

fn resolve_dir(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        // If the user runs with `--path .`, keep the original relative path
        // (e.g. "./translations") to avoid noisy "././translations" output.
        let is_cur_dir = root_dir.components().all(|c| matches!(c, Component::CurDir));
        if is_cur_dir {
            p.to_path_buf()
        } else {
            // Strip leading "./" so joins become "<root>/translations"
            // instead of "<root>/./translations".
            let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
            root_dir.join(rel)
        }
    }
}
