use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::{Config, ResolvedOptions, load_config},
    core::ShortcutSession,
};

use super::types::{
    ConfigDto, DetectShortcutsParams, DetectShortcutsResult, GetConfigParams, GetManifestParams,
    ManifestResult,
};

/// A project's session and the config it was built from.
struct SessionEntry {
    config: Config,
    session: Arc<ShortcutSession>,
}

type SessionMap = HashMap<PathBuf, SessionEntry>;

#[derive(Clone)]
pub struct ShortcutsMcpServer {
    tool_router: ToolRouter<Self>,
    /// One session per project root, created on the first scan of that root.
    sessions: Arc<Mutex<SessionMap>>,
}

impl Default for ShortcutsMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ShortcutsMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get the shortcut detection configuration
    #[tool(description = "Get the shortcut detection configuration for a project.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file,
            config: result.config,
        })
    }

    /// Scan the project and commit the result to its session
    #[tool(
        description = "Scan route files for createShortcutRoute declarations. Returns detected shortcuts, the generated manifest entries and per-file warnings."
    )]
    pub async fn detect_shortcuts(
        &self,
        params: Parameters<DetectShortcutsParams>,
    ) -> Result<CallToolResult, McpError> {
        let session = self.session_for(Path::new(&params.0.project_root_path))?;

        let snapshot = session
            .rescan()
            .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;

        to_tool_result(&DetectShortcutsResult {
            generation: snapshot.generation,
            files_scanned: snapshot.files_scanned,
            shortcuts: snapshot.shortcuts.clone(),
            manifest: snapshot.manifest.clone(),
            warnings: snapshot.warnings.clone(),
        })
    }

    /// Get the manifest from the last scan without rescanning
    #[tool(
        description = "Get the manifest shortcuts from the last detect_shortcuts call for a project. Does not rescan; returns an empty manifest with generation 0 if the project was never scanned."
    )]
    pub async fn get_manifest(
        &self,
        params: Parameters<GetManifestParams>,
    ) -> Result<CallToolResult, McpError> {
        let key = session_key(Path::new(&params.0.project_root_path));
        let session = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .map(|entry| entry.session.clone());

        let result = match session {
            Some(session) => {
                let snapshot = session.current();
                ManifestResult {
                    generation: snapshot.generation,
                    manifest: snapshot.manifest.clone(),
                }
            }
            None => ManifestResult {
                generation: 0,
                manifest: Vec::new(),
            },
        };

        to_tool_result(&result)
    }

    /// Session for `root`, built from the project's current config.
    ///
    /// A session whose config no longer matches `.shortcutsrc.json` is replaced;
    /// generations keep increasing across the replacement.
    fn session_for(&self, root: &Path) -> Result<Arc<ShortcutSession>, McpError> {
        let key = session_key(root);
        let config = load_config(&key)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
            .config;

        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let last_generation = match sessions.get(&key) {
            Some(entry) if entry.config == config => return Ok(entry.session.clone()),
            Some(entry) => entry.session.current().generation,
            None => 0,
        };

        let options = ResolvedOptions::resolve(&config)
            .map_err(|e| McpError::internal_error(format!("Invalid config: {}", e), None))?;
        let session =
            Arc::new(ShortcutSession::new(key.clone(), options).starting_after(last_generation));
        sessions.insert(
            key,
            SessionEntry {
                config,
                session: session.clone(),
            },
        );
        Ok(session)
    }
}

fn session_key(root: &Path) -> PathBuf {
    root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for ShortcutsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "pwa-shortcuts MCP detects PWA shortcut routes declared with createShortcutRoute \
                 and generates web app manifest shortcuts.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. detect_shortcuts - Scan route files and return shortcuts, manifest and warnings\n\
                 3. get_manifest - Get the manifest from the last scan without rescanning\n\n\
                 Run detect_shortcuts after editing route files; get_manifest only reflects the last scan."
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
            let service = ShortcutsMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
