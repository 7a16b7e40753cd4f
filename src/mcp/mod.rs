//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the catalog checks to AI assistants over stdio. All tools are
//! read-only: agents inspect catalogs through them and apply fixes by
//! editing the .ts files directly.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod server;
pub mod types;

pub use server::{TscheckMcpServer, run_server};
