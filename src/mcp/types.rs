use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root (directory containing .tscheckrc.json)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLocalesParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanMissingParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanUntranslatedParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanPlaceholdersParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryTranslationParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Locale to resolve against (e.g. "fr")
    pub locale: String,
    /// Context name (e.g. "Dashboard")
    pub context: String,
    /// Source text to resolve
    pub source: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub ignores: Vec<String>,
    pub ignore_texts: Vec<String>,
    pub translations_root: String,
    pub primary_locale: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            ignores: c.ignores,
            ignore_texts: c.ignore_texts,
            translations_root: c.translations_root,
            primary_locale: c.primary_locale,
        }
    }
}

// ============================================================
// Locales Types (get_locales)
// ============================================================

/// Result of get_locales operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub translations_dir: String,
    pub primary_locale: String,
    pub locales: Vec<LocaleInfo>,
}

/// Information about a single locale catalog
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub locale: String,
    pub file_path: String,
    pub context_count: usize,
    pub message_count: usize,
}

// ============================================================
// Scan Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub missing: MissingStats,
    pub orphans: OrphanStats,
    pub untranslated: UntranslatedStats,
    pub placeholders: PlaceholderStats,
    pub markup: MarkupStats,
    pub unfinished: UnfinishedStats,
    pub vanished: VanishedStats,
    pub duplicates: DuplicateStats,
    pub parse_errors: ParseErrorStats,
}

/// Statistics for entries missing from replica catalogs
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingStats {
    pub total_count: usize,
    pub affected_locales: Vec<String>,
}

/// Statistics for entries only present in replica catalogs
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrphanStats {
    pub total_count: usize,
}

/// Statistics for finished translations identical to their source
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UntranslatedStats {
    pub total_count: usize,
    pub affected_locales: Vec<String>,
}

/// Statistics for placeholder set mismatches
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderStats {
    pub total_count: usize,
}

/// Statistics for malformed markup in translations
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkupStats {
    pub total_count: usize,
}

/// Statistics for draft and empty translations
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnfinishedStats {
    pub total_count: usize,
    pub affected_locales: Vec<String>,
}

/// Statistics for vanished and obsolete entries
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VanishedStats {
    pub total_count: usize,
}

/// Statistics for repeated (context, source) pairs
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateStats {
    pub total_count: usize,
}

/// Statistics for catalog files that could not be parsed
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorStats {
    pub total_count: usize,
}

// ============================================================
// Missing Scan Types (scan_missing)
// ============================================================

/// Result of scan_missing operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingScanResult {
    pub total_count: usize,
    pub items: Vec<MissingItem>,
    pub pagination: Pagination,
}

/// A primary-locale entry with no counterpart in one or more locales
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingItem {
    pub context: String,
    pub source: String,
    pub missing_in: Vec<String>,
    pub file_path: String,
    pub line: usize,
}

// ============================================================
// Untranslated Scan Types (scan_untranslated)
// ============================================================

/// Result of scan_untranslated operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UntranslatedScanResult {
    pub total_count: usize,
    pub items: Vec<UntranslatedItem>,
    pub pagination: Pagination,
}

/// A finished translation identical to its source text
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UntranslatedItem {
    pub context: String,
    pub source: String,
    pub locale: String,
    pub file_path: String,
    pub line: usize,
}

// ============================================================
// Placeholder Scan Types (scan_placeholders)
// ============================================================

/// Result of scan_placeholders operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderScanResult {
    pub total_count: usize,
    pub items: Vec<PlaceholderItem>,
    pub pagination: Pagination,
}

/// A translation whose %N placeholders differ from its source
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderItem {
    pub context: String,
    pub source: String,
    pub translation: String,
    /// Placeholders in the source text (e.g. "%1, %2")
    pub expected: String,
    /// Placeholders in the translation text
    pub found: String,
    pub file_path: String,
    pub line: usize,
}

// ============================================================
// Query Types (query_translation)
// ============================================================

/// Result of query_translation operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryTranslationResult {
    pub locale: String,
    pub context: String,
    pub source: String,
    /// Resolved text; equals `source` when the lookup fell back
    pub text: String,
    /// False when the table has no entry and the source text was returned
    pub found: bool,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
