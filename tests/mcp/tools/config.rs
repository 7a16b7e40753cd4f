use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscheck::mcp::{
    TscheckMcpServer,
    types::{GetConfigParams, GetLocalesParams},
};

use crate::{FR_CATALOG, McpTestFixture, extract_tool_result_json, fixture_clean};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    // Check default config values
    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["translationsRoot"], "./translations");
    assert_eq!(json_result["config"]["primaryLocale"], "en");
    assert!(json_result["config"]["ignores"].is_array());
    assert!(json_result["config"]["ignoreTexts"].is_array());
}

#[tokio::test]
async fn test_get_config_from_rc_file() {
    let fixture = McpTestFixture::new().unwrap();

    fixture
        .write_config(&json!({
            "translationsRoot": "i18n",
            "primaryLocale": "fr",
            "ignoreTexts": ["OK"]
        }))
        .unwrap();

    let server = TscheckMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    // Should use custom config
    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["translationsRoot"], "i18n");
    assert_eq!(json_result["config"]["primaryLocale"], "fr");
    assert_eq!(json_result["config"]["ignoreTexts"][0], "OK");
}

// ============================================================================
// get_locales tests
// ============================================================================

#[tokio::test]
async fn test_get_locales_lists_catalogs() {
    let fixture = fixture_clean().unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["primaryLocale"], "en");
    assert!(
        json_result["translationsDir"]
            .as_str()
            .unwrap()
            .ends_with("translations")
    );

    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 2);

    // Sorted by locale code
    assert_eq!(locales[0]["locale"], "en");
    assert!(
        locales[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("en.ts")
    );
    assert_eq!(locales[0]["contextCount"], 1);
    assert_eq!(locales[0]["messageCount"], 2);

    assert_eq!(locales[1]["locale"], "fr");
    assert_eq!(locales[1]["messageCount"], 2);
}

#[tokio::test]
async fn test_get_locales_requires_primary_catalog() {
    let fixture = McpTestFixture::with_catalogs(vec![("fr", FR_CATALOG)]).unwrap();
    let server = TscheckMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_locales(params).await.unwrap_err();
    assert!(err.message.contains("Failed to initialize"));
}
