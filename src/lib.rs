//! pwa-shortcuts - PWA shortcut route detector
//!
//! Finds routes declared with `createShortcutRoute("/path")({ ... })` in a
//! project's JavaScript/TypeScript sources and turns them into the
//! `shortcuts` section of a web app manifest.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (scan, generate, init)
//! - `config`: Configuration file loading and option resolution
//! - `core`: Detection pipeline (parse, match, extract, generate)
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
