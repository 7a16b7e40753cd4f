use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

/// Find catalog files under the translations root.
///
/// Walks the directory recursively, picking up `*.ts` files and skipping
/// anything matched by an ignore glob (tested against both the full path
/// and the file name, so `draft_*.ts` and `**/legacy/**` both work).
/// Results are sorted so check output is stable between runs.
pub fn scan_catalog_files(translations_dir: &Path, ignores: &[String]) -> Result<Vec<PathBuf>> {
    if !translations_dir.exists() {
        bail!(
            "Translations directory '{}' does not exist.\n\
             Hint: Check your .tscheckrc.json 'translationsRoot' setting.",
            translations_dir.display()
        );
    }

    if !translations_dir.is_dir() {
        bail!("'{}' is not a directory.", translations_dir.display());
    }

    // Invalid patterns were already rejected by Config::validate.
    let ignore_patterns: Vec<Pattern> = ignores
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let mut files = Vec::new();
    for entry in WalkDir::new(translations_dir) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("ts") {
            continue;
        }

        let path_str = path.to_string_lossy();
        let file_name = entry.file_name().to_string_lossy();
        if ignore_patterns
            .iter()
            .any(|p| p.matches(&path_str) || p.matches(&file_name))
        {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.ts" -> Some("en")
/// - "fr-CA.ts" -> Some("fr-CA")
/// - "/path/to/translations/fr.ts" -> Some("fr")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
