use rmcp::handler::server::wrapper::Parameters;
use tscheck::mcp::{
    TscheckMcpServer,
    types::{
        ScanMissingParams, ScanOverviewParams, ScanPlaceholdersParams, ScanUntranslatedParams,
    },
};

use crate::{
    EN_CATALOG, FR_CATALOG, McpTestFixture, assert_pagination, extract_tool_result_json,
    fixture_clean, fixture_with_issues, fixture_with_missing_entry,
    fixture_with_placeholder_mismatch, fixture_with_untranslated,
};

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview_clean_project() {
    let fixture = fixture_clean().unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    // Clean project should have zero issue counts
    for section in [
        "missing",
        "orphans",
        "untranslated",
        "placeholders",
        "markup",
        "unfinished",
        "vanished",
        "duplicates",
        "parseErrors",
    ] {
        assert_eq!(
            json_result[section]["totalCount"], 0,
            "expected no {section} issues"
        );
    }
}

#[tokio::test]
async fn test_scan_overview_counts_issues() {
    let fixture = fixture_with_issues().unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["missing"]["totalCount"], 1);
    assert_eq!(json_result["missing"]["affectedLocales"][0], "fr");

    assert_eq!(json_result["untranslated"]["totalCount"], 1);
    assert_eq!(json_result["untranslated"]["affectedLocales"][0], "fr");

    assert_eq!(json_result["unfinished"]["totalCount"], 1);
    assert_eq!(json_result["unfinished"]["affectedLocales"][0], "fr");

    assert_eq!(json_result["orphans"]["totalCount"], 0);
    assert_eq!(json_result["placeholders"]["totalCount"], 0);
    assert_eq!(json_result["vanished"]["totalCount"], 0);
}

#[tokio::test]
async fn test_scan_overview_counts_parse_errors() {
    let fixture = fixture_clean().unwrap();
    fixture.write_catalog_file("de", "this is not a catalog").unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["parseErrors"]["totalCount"], 1);
    assert_eq!(json_result["missing"]["totalCount"], 0);
}

#[tokio::test]
async fn test_scan_overview_fails_without_primary_catalog() {
    let fixture = McpTestFixture::with_catalogs(vec![("fr", FR_CATALOG)]).unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let err = server.scan_overview(params).await.unwrap_err();
    assert!(err.message.contains("Failed to initialize"));
}

// ============================================================================
// scan_missing tests
// ============================================================================

#[tokio::test]
async fn test_scan_missing_reports_entry() {
    let fixture = fixture_with_missing_entry().unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(ScanMissingParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    });

    let result = server.scan_missing(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);

    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);

    let item = &items[0];
    assert_eq!(item["context"], "Dashboard");
    assert_eq!(item["source"], "Export Data");

    let missing_in = item["missingIn"].as_array().unwrap();
    assert_eq!(missing_in.len(), 1);
    assert_eq!(missing_in[0], "fr");

    // Location points at the primary catalog entry
    assert!(item["filePath"].as_str().unwrap().ends_with("en.ts"));
    assert!(item["line"].as_u64().unwrap() > 0);

    assert_pagination(&json_result, 0, 50, false);
}

#[tokio::test]
async fn test_scan_missing_no_issues() {
    let fixture = fixture_clean().unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(ScanMissingParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    });

    let result = server.scan_missing(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 0);
    assert_pagination(&json_result, 0, 50, false);
}

#[tokio::test]
async fn test_scan_missing_pagination() {
    // Three primary entries with no replica counterpart, in file order
    let extra = r#"    <message>
        <location filename="../src/dashboard.cpp" line="88"/>
        <source>Export Data</source>
        <translation>Export Data</translation>
    </message>
    <message>
        <location filename="../src/dashboard.cpp" line="93"/>
        <source>Import Data</source>
        <translation>Import Data</translation>
    </message>
    <message>
        <location filename="../src/dashboard.cpp" line="101"/>
        <source>Print Report</source>
        <translation>Print Report</translation>
    </message>
</context>"#;
    let en = EN_CATALOG.replace("</context>", extra);
    let fixture = McpTestFixture::with_catalogs(vec![("en", &en), ("fr", FR_CATALOG)]).unwrap();
    let server = TscheckMcpServer::new();

    // Get first page
    let params = Parameters(ScanMissingParams {
        project_root_path: fixture.root(),
        limit: Some(2),
        offset: Some(0),
    });

    let result = server.scan_missing(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["source"], "Export Data");
    assert_eq!(items[1]["source"], "Import Data");
    assert_pagination(&json_result, 0, 2, true);

    // Get last page
    let params = Parameters(ScanMissingParams {
        project_root_path: fixture.root(),
        limit: Some(2),
        offset: Some(2),
    });

    let result = server.scan_missing(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["source"], "Print Report");
    assert_pagination(&json_result, 2, 2, false);
}

// ============================================================================
// scan_untranslated tests
// ============================================================================

#[tokio::test]
async fn test_scan_untranslated_reports_identical_text() {
    let fixture = fixture_with_untranslated().unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(ScanUntranslatedParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    });

    let result = server.scan_untranslated(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);

    let item = &json_result["items"][0];
    assert_eq!(item["context"], "Dashboard");
    assert_eq!(item["source"], "Water Quality");
    assert_eq!(item["locale"], "fr");
    assert!(item["filePath"].as_str().unwrap().ends_with("fr.ts"));
}

#[tokio::test]
async fn test_scan_untranslated_respects_ignore_texts() {
    let fixture = fixture_with_untranslated().unwrap();
    fixture
        .write_config(&serde_json::json!({ "ignoreTexts": ["Water Quality"] }))
        .unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(ScanUntranslatedParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    });

    let result = server.scan_untranslated(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
}

// ============================================================================
// scan_placeholders tests
// ============================================================================

#[tokio::test]
async fn test_scan_placeholders_reports_mismatch() {
    let fixture = fixture_with_placeholder_mismatch().unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(ScanPlaceholdersParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    });

    let result = server.scan_placeholders(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);

    let item = &json_result["items"][0];
    assert_eq!(item["context"], "Dashboard");
    assert_eq!(item["source"], "%1 stations online");
    assert_eq!(item["translation"], "stations en ligne");
    assert_eq!(item["expected"], "%1");
    assert_eq!(item["found"], "none");
    assert!(item["filePath"].as_str().unwrap().ends_with("fr.ts"));
}

#[tokio::test]
async fn test_scan_placeholders_clean() {
    let fixture = fixture_clean().unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(ScanPlaceholdersParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    });

    let result = server.scan_placeholders(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_pagination(&json_result, 0, 50, false);
}
