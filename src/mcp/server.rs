use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    catalog::TranslationTable,
    cli::args::CommonArgs,
    config::load_config,
    context::CheckContext,
    placeholder::format_placeholders,
    rules::{
        duplicate::check_duplicate_message_issues, markup::check_markup_issues,
        missing::check_missing_translation_issues, orphan::check_orphan_translation_issues,
        placeholders::check_placeholder_issues, unfinished::check_unfinished_issues,
        untranslated::check_untranslated_issues, vanished::check_vanished_issues,
    },
};

use super::types::{
    ConfigDto, ConfigValues, DuplicateStats, GetConfigParams, GetLocalesParams, LocaleInfo,
    LocalesResult, MarkupStats, MissingItem, MissingScanResult, MissingStats, OrphanStats,
    Pagination, ParseErrorStats, PlaceholderItem, PlaceholderScanResult, PlaceholderStats,
    QueryTranslationParams, QueryTranslationResult, ScanMissingParams, ScanOverviewParams,
    ScanOverviewResult, ScanPlaceholdersParams, ScanUntranslatedParams, UnfinishedStats,
    UntranslatedItem, UntranslatedScanResult, UntranslatedStats, VanishedStats,
};

fn common_args(project_root_path: &str) -> CommonArgs {
    CommonArgs {
        primary_locale: None,
        path: Some(PathBuf::from(project_root_path)),
        translations_root: None,
        verbose: false,
    }
}

#[derive(Clone)]
pub struct TscheckMcpServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TscheckMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get statistics of all translation catalog issues without detailed items. Use this first to understand the overall state before diving into details."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let args = common_args(&params.0.project_root_path);

        let ctx = CheckContext::new(&args)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

        // Count missing entries and collect affected locales
        let mut missing_locales: HashSet<String> = HashSet::new();
        let missing_count = check_missing_translation_issues(&ctx)
            .iter()
            .map(|issue| {
                for locale in &issue.missing_in {
                    missing_locales.insert(locale.clone());
                }
            })
            .count();

        let mut missing_locales_vec: Vec<String> = missing_locales.into_iter().collect();
        missing_locales_vec.sort();

        // Count untranslated entries and collect affected locales
        let mut untranslated_locales: HashSet<String> = HashSet::new();
        let untranslated_count = check_untranslated_issues(&ctx)
            .iter()
            .map(|issue| {
                untranslated_locales.insert(issue.locale.clone());
            })
            .count();

        let mut untranslated_locales_vec: Vec<String> = untranslated_locales.into_iter().collect();
        untranslated_locales_vec.sort();

        // Count unfinished entries and collect affected locales
        let mut unfinished_locales: HashSet<String> = HashSet::new();
        let unfinished_count = check_unfinished_issues(&ctx)
            .iter()
            .map(|issue| {
                unfinished_locales.insert(issue.locale.clone());
            })
            .count();

        let mut unfinished_locales_vec: Vec<String> = unfinished_locales.into_iter().collect();
        unfinished_locales_vec.sort();

        let overview = ScanOverviewResult {
            missing: MissingStats {
                total_count: missing_count,
                affected_locales: missing_locales_vec,
            },
            orphans: OrphanStats {
                total_count: check_orphan_translation_issues(&ctx).len(),
            },
            untranslated: UntranslatedStats {
                total_count: untranslated_count,
                affected_locales: untranslated_locales_vec,
            },
            placeholders: PlaceholderStats {
                total_count: check_placeholder_issues(&ctx).len(),
            },
            markup: MarkupStats {
                total_count: check_markup_issues(&ctx).len(),
            },
            unfinished: UnfinishedStats {
                total_count: unfinished_count,
                affected_locales: unfinished_locales_vec,
            },
            vanished: VanishedStats {
                total_count: check_vanished_issues(&ctx).len(),
            },
            duplicates: DuplicateStats {
                total_count: check_duplicate_message_issues(&ctx).len(),
            },
            parse_errors: ParseErrorStats {
                total_count: ctx.catalog_parse_errors().len(),
            },
        };

        let json_str = serde_json::to_string_pretty(&overview).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Scan for entries missing from replica locale catalogs
    #[tool(
        description = "Scan for entries present in the primary locale catalog but missing from other locales. Returns paginated list with the primary entry position to help locate fixes."
    )]
    pub async fn scan_missing(
        &self,
        params: Parameters<ScanMissingParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);
        let args = common_args(&params.0.project_root_path);

        let ctx = CheckContext::new(&args)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

        let all_items: Vec<MissingItem> = check_missing_translation_issues(&ctx)
            .into_iter()
            .map(|issue| {
                let entry = issue.context;
                MissingItem {
                    context: entry.context,
                    source: entry.source,
                    missing_in: issue.missing_in,
                    file_path: entry.location.file_path,
                    line: entry.location.line,
                }
            })
            .collect();

        let total_count = all_items.len();

        // Apply pagination
        let paginated: Vec<MissingItem> = all_items.into_iter().skip(offset).take(limit).collect();

        let has_more = offset + paginated.len() < total_count;

        let scan_result = MissingScanResult {
            total_count,
            items: paginated,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        let json_str = serde_json::to_string_pretty(&scan_result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Scan for finished translations identical to their source text
    #[tool(
        description = "Scan for finished translations whose text is identical to the source. These may indicate text was copied without translation. Returns paginated list."
    )]
    pub async fn scan_untranslated(
        &self,
        params: Parameters<ScanUntranslatedParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);
        let args = common_args(&params.0.project_root_path);

        let ctx = CheckContext::new(&args)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

        let all_items: Vec<UntranslatedItem> = check_untranslated_issues(&ctx)
            .into_iter()
            .map(|issue| {
                let entry = issue.context;
                UntranslatedItem {
                    context: entry.context,
                    source: entry.source,
                    locale: issue.locale,
                    file_path: entry.location.file_path,
                    line: entry.location.line,
                }
            })
            .collect();

        let total_count = all_items.len();

        // Apply pagination
        let paginated: Vec<UntranslatedItem> =
            all_items.into_iter().skip(offset).take(limit).collect();

        let has_more = offset + paginated.len() < total_count;

        let scan_result = UntranslatedScanResult {
            total_count,
            items: paginated,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        let json_str = serde_json::to_string_pretty(&scan_result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Scan for %N placeholder mismatches between source and translation
    #[tool(
        description = "Scan for translations whose %N placeholders differ from the source text. Such catalogs format incorrectly at runtime. Returns paginated list."
    )]
    pub async fn scan_placeholders(
        &self,
        params: Parameters<ScanPlaceholdersParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);
        let args = common_args(&params.0.project_root_path);

        let ctx = CheckContext::new(&args)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

        let all_items: Vec<PlaceholderItem> = check_placeholder_issues(&ctx)
            .into_iter()
            .map(|issue| {
                let expected = format_placeholders(&issue.expected);
                let found = format_placeholders(&issue.found);
                let entry = issue.context;
                PlaceholderItem {
                    context: entry.context,
                    source: entry.source,
                    translation: entry.translation,
                    expected,
                    found,
                    file_path: entry.location.file_path,
                    line: entry.location.line,
                }
            })
            .collect();

        let total_count = all_items.len();

        // Apply pagination
        let paginated: Vec<PlaceholderItem> =
            all_items.into_iter().skip(offset).take(limit).collect();

        let has_more = offset + paginated.len() < total_count;

        let scan_result = PlaceholderScanResult {
            total_count,
            items: paginated,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        let json_str = serde_json::to_string_pretty(&scan_result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Resolve one (context, source) pair against a locale catalog
    #[tool(
        description = "Resolve a (context, source) pair against one locale catalog, the way the application would at runtime. Falls back to the source text when no finished translation exists."
    )]
    pub async fn query_translation(
        &self,
        params: Parameters<QueryTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let args = common_args(&params.0.project_root_path);

        let ctx = CheckContext::new(&args)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

        let Some(catalog) = ctx.catalogs.get(&params.0.locale) else {
            return Err(McpError::invalid_params(
                format!(
                    "Locale '{}' not found (available: {})",
                    params.0.locale,
                    ctx.locales().join(", ")
                ),
                None,
            ));
        };

        let table = TranslationTable::from_document(&catalog.document);
        let resolved = table.lookup(&params.0.context, &params.0.source);

        let result = QueryTranslationResult {
            locale: params.0.locale.clone(),
            context: params.0.context.clone(),
            source: params.0.source.clone(),
            text: resolved.unwrap_or(&params.0.source).to_string(),
            found: resolved.is_some(),
        };

        let json_str = serde_json::to_string_pretty(&result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Get available locales and their catalog files
    #[tool(description = "Get available locale catalogs, their file paths and message counts.")]
    pub async fn get_locales(
        &self,
        params: Parameters<GetLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let args = common_args(&params.0.project_root_path);

        let ctx = CheckContext::new(&args)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

        let mut locales: Vec<LocaleInfo> = ctx
            .catalogs
            .values()
            .map(|catalog| LocaleInfo {
                locale: catalog.locale.clone(),
                file_path: catalog.file_path.clone(),
                context_count: catalog.context_count(),
                message_count: catalog.message_count(),
            })
            .collect();

        // Sort locales alphabetically
        locales.sort_by(|a, b| a.locale.cmp(&b.locale));

        let result = LocalesResult {
            translations_dir: ctx.resolved_translations_dir().to_string_lossy().to_string(),
            primary_locale: ctx.config.primary_locale.clone(),
            locales,
        };

        let json_str = serde_json::to_string_pretty(&result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Get the current tscheck configuration
    #[tool(description = "Get the current tscheck configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        let json_str = serde_json::to_string_pretty(&config_dto).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }
}

#[tool_handler]
impl ServerHandler for TscheckMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tscheck MCP helps AI agents complete translation work on Qt Linguist .ts catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_locales - Get available locale catalogs and their message counts\n\
                 3. scan_overview - Get statistics of all catalog issues (missing, orphans, untranslated, placeholders, markup, unfinished, vanished, duplicates)\n\
                 4. scan_missing - Get entries missing from replica locales (paginated)\n\
                 5. scan_untranslated - Get finished translations identical to their source (paginated)\n\
                 6. scan_placeholders - Get %N placeholder mismatches (paginated)\n\
                 7. query_translation - Resolve one (context, source) pair against a locale\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix missing entries first (add the entry to each lagging catalog)\n\
                 3. Then translate untranslated entries (values identical to the source)\n\
                 4. Finally fix placeholder mismatches (align %N markers with the source)\n\n\
                 All tools are read-only. Apply fixes by editing the .ts files directly,\n\
                 then re-run scan_overview to confirm."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TscheckMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
