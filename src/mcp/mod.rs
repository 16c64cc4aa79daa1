//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes shortcut detection to AI assistants over stdio. The server keeps
//! one `ShortcutSession` per project root so `get_manifest` can answer from
//! the last committed pass without rescanning.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{ShortcutsMcpServer, run_server};
