//! # Coolify MCP Server
//!
//! A Model Context Protocol server that exposes a Coolify instance as a set
//! of callable tools: servers, projects, applications, databases, services,
//! environment variables, deployments, private keys and teams.
//!
//! ## Features
//!
//! - **Validated Calls**: Every tool checks its arguments before the API is touched
//! - **Typed Client**: One method per Coolify endpoint over a pluggable transport
//! - **Readable Results**: Payloads render as stable `Label: value` text blocks
//! - **Prompt Templates**: Ready-made task outlines for common deployment chores
//!
//! ## Example
//!
//! ```rust,no_run
//! use coolify_mcp::config::types::Settings;
//! use std::time::Duration;
//!
//! # async fn demo() -> coolify_mcp::Result<()> {
//! let settings = Settings {
//!     base_url: "https://coolify.example.com".to_string(),
//!     token: "token".to_string(),
//!     timeout: Duration::from_secs(30),
//!     server_name: "coolify-mcp-server".to_string(),
//! };
//! coolify_mcp::serve_stdio(&settings).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod server;
pub mod tools;

// Re-export commonly used types and functions
pub use error::{AppError, ConfigError, Result};
pub use platform::api::{CoolifyClient, HttpTransport, Transport};
pub use server::{McpServer, ServerConfig};
pub use tools::{ToolOutput, ToolRouter};

use config::types::Settings;

/// The current version of the server
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the HTTP-backed server described by `settings`
pub fn build_server(settings: &Settings) -> Result<McpServer<HttpTransport>> {
    let client = CoolifyClient::connect(&settings.base_url, &settings.token, settings.timeout)?;
    let config = ServerConfig::default().name(settings.server_name.clone());
    Ok(McpServer::new(config, ToolRouter::new(client)))
}

/// Serve MCP over stdin/stdout until stdin closes
pub async fn serve_stdio(settings: &Settings) -> Result<()> {
    log::info!("Connecting to Coolify at {}", settings.base_url);
    build_server(settings)?.run_stdio().await
}
