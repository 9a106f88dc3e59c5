//! MCP (Model Context Protocol) server over stdio
//!
//! Newline-delimited JSON-RPC 2.0 on stdin/stdout. Exposes one tool
//! (`target_checklist`), one prompt (`field_checklist`) and one resource
//! (`wingit://personal-checklist`).

pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;

pub use server::McpServer;
