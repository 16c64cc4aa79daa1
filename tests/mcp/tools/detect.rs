use pwa_shortcuts::mcp::{ShortcutsMcpServer, types::DetectShortcutsParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{CART_ROUTE, INBOX_ROUTE, McpTestFixture, extract_tool_result_json};

fn params(fixture: &McpTestFixture) -> Parameters<DetectShortcutsParams> {
    Parameters(DetectShortcutsParams {
        project_root_path: fixture.root(),
    })
}

// ============================================================================
// detect_shortcuts tests
// ============================================================================

#[tokio::test]
async fn test_detect_shortcuts_returns_manifest() {
    let fixture =
        McpTestFixture::with_routes(vec![("cart.tsx", CART_ROUTE), ("inbox.ts", INBOX_ROUTE)])
            .unwrap();
    let server = ShortcutsMcpServer::new();

    let result = server.detect_shortcuts(params(&fixture)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["generation"], 1);
    assert_eq!(json_result["filesScanned"], 2);
    assert_eq!(json_result["shortcuts"][0]["path"], "/cart");
    assert_eq!(json_result["shortcuts"][1]["path"], "/inbox");
    assert_eq!(
        json_result["manifest"][0],
        json!({
            "name": "Shopping Cart",
            "short_name": "Cart",
            "description": "Go to Shopping Cart",
            "url": "/cart",
            "icons": [
                { "src": "/icons/icon-192.png", "sizes": "192x192", "type": "image/png" },
                { "src": "/icons/icon-512.png", "sizes": "512x512", "type": "image/png" }
            ]
        })
    );
    assert_eq!(json_result["manifest"][1]["icons"], json!([]));
    assert_eq!(json_result["warnings"], json!([]));
}

#[tokio::test]
async fn test_detect_shortcuts_reports_parse_warnings() {
    let fixture = McpTestFixture::with_routes(vec![
        ("broken.ts", "export const = ;"),
        ("cart.tsx", CART_ROUTE),
    ])
    .unwrap();
    let server = ShortcutsMcpServer::new();

    let result = server.detect_shortcuts(params(&fixture)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["shortcuts"].as_array().unwrap().len(), 1);
    let warnings = json_result["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(
        warnings[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("broken.ts")
    );
}

#[tokio::test]
async fn test_detect_shortcuts_rescan_replaces_result() {
    let fixture = McpTestFixture::with_routes(vec![("cart.tsx", CART_ROUTE)]).unwrap();
    let server = ShortcutsMcpServer::new();

    server.detect_shortcuts(params(&fixture)).await.unwrap();

    fixture.write_route_file("inbox.ts", INBOX_ROUTE).unwrap();
    let result = server.detect_shortcuts(params(&fixture)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["generation"], 2);
    assert_eq!(json_result["manifest"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_detect_shortcuts_missing_root_is_error() {
    let server = ShortcutsMcpServer::new();
    let params = Parameters(DetectShortcutsParams {
        project_root_path: "/definitely/not/a/project".to_string(),
    });

    assert!(server.detect_shortcuts(params).await.is_err());
}

#[tokio::test]
async fn test_detect_shortcuts_picks_up_config_changes() {
    let fixture = McpTestFixture::with_routes(vec![
        ("cart.tsx", CART_ROUTE),
        (
            "inbox.ts",
            r#"export const inboxRoute = defineShortcut("/inbox")({ name: "Inbox" });"#,
        ),
    ])
    .unwrap();
    let server = ShortcutsMcpServer::new();

    let first = extract_tool_result_json(&server.detect_shortcuts(params(&fixture)).await.unwrap());
    assert_eq!(first["shortcuts"][0]["path"], "/cart");

    fixture
        .write_config(&json!({ "functionName": "defineShortcut" }))
        .unwrap();
    let second =
        extract_tool_result_json(&server.detect_shortcuts(params(&fixture)).await.unwrap());

    assert_eq!(second["generation"], 2);
    let shortcuts = second["shortcuts"].as_array().unwrap();
    assert_eq!(shortcuts.len(), 1);
    assert_eq!(shortcuts[0]["path"], "/inbox");
}
