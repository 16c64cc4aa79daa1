use pwa_shortcuts::mcp::{ShortcutsMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = ShortcutsMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(
        json_result["config"]["routeFiles"],
        json!(["src/routes/**/*.{js,jsx,ts,tsx}"])
    );
    assert_eq!(json_result["config"]["functionName"], "createShortcutRoute");
    assert_eq!(json_result["config"]["iconSizes"], json!(["192x192", "512x512"]));
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "routeFiles": "app/**/*.tsx",
            "defaultIcon": "/static/icon-192.png"
        }))
        .unwrap();

    let server = ShortcutsMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["routeFiles"], json!(["app/**/*.tsx"]));
    assert_eq!(json_result["config"]["defaultIcon"], "/static/icon-192.png");
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "routeExportPattern": "(" }))
        .unwrap();

    let server = ShortcutsMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
