//! MCP stdio server
//!
//! Reads newline-delimited JSON-RPC messages, answers each one in order and
//! writes the response as a single line. stdout carries protocol frames
//! only; logging goes to stderr.
//!
//! # Architecture
//!
//! ```text
//! MCP client
//!     ↓ JSON-RPC over stdio
//! McpServer (this module)
//!     ↓ tools/call
//! ToolRouter
//!     ↓
//! CoolifyClient → Coolify API
//! ```

pub mod prompts;
pub mod protocol;

use crate::error::Result;
use crate::platform::api::Transport;
use crate::tools::{ToolRouter, catalog};
use log::{debug, info, warn};
use protocol::{
    INTERNAL_ERROR, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION,
    PromptGetParams, ServerCapabilities, ServerInfo, ToolCallParams, ToolDescriptor,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Name reported in `serverInfo` unless configured otherwise
pub const DEFAULT_SERVER_NAME: &str = "coolify-mcp-server";

/// Configuration for the MCP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Name reported to clients
    pub name: String,
    /// Version reported to clients
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

impl ServerConfig {
    /// Sets the reported server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// MCP server answering over a line-delimited stream
pub struct McpServer<T: Transport> {
    config: ServerConfig,
    router: ToolRouter<T>,
}

impl<T: Transport> McpServer<T> {
    pub fn new(config: ServerConfig, router: ToolRouter<T>) -> Self {
        Self { config, router }
    }

    /// Serve on the process's stdin and stdout until stdin closes
    pub async fn run_stdio(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve one stream pair until the reader reaches end of input
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("{} {} listening on stdio", self.config.name, self.config.version);

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let mut frame = serde_json::to_string(&response)?;
                frame.push('\n');
                writer.write_all(frame.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        info!("Input closed, shutting down");
        Ok(())
    }

    /// Answer one raw frame; notifications produce no response
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("Malformed frame: {}", e);
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    JsonRpcError::parse_error(e.to_string()),
                ));
            }
        };

        let request: JsonRpcRequest = match serde_json::from_value(value.clone()) {
            Ok(request) => request,
            Err(e) => {
                warn!("Invalid request frame: {}", e);
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                return Some(JsonRpcResponse::failure(
                    id,
                    JsonRpcError::invalid_request(e.to_string()),
                ));
            }
        };

        if request.is_notification() {
            debug!("Notification {}", request.method);
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        Some(match self.dispatch(&request).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    async fn dispatch(&self, request: &JsonRpcRequest) -> std::result::Result<Value, JsonRpcError> {
        match request.method.as_str() {
            "initialize" => to_result(&self.initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(tools_list()),
            "tools/call" => {
                let params: ToolCallParams = params(request)?;
                let output = self
                    .router
                    .call(&params.name, params.arguments.as_ref())
                    .await
                    .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?;
                to_result(&output)
            }
            "prompts/list" => Ok(prompts_list()),
            "prompts/get" => {
                let params: PromptGetParams = params(request)?;
                let prompt = prompts::find(&params.name).ok_or_else(|| {
                    JsonRpcError::invalid_params(format!("Prompt not found: {}", params.name))
                })?;
                Ok(json!({
                    "description": prompt.description,
                    "messages": [prompt.message(params.arguments.as_ref())],
                }))
            }
            other => Err(JsonRpcError::method_not_found(other)),
        }
    }

    fn initialize(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION,
            capabilities: ServerCapabilities {
                tools: Map::new(),
                prompts: Map::new(),
            },
            server_info: ServerInfo {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
            },
        }
    }
}

fn params<P: DeserializeOwned>(request: &JsonRpcRequest) -> std::result::Result<P, JsonRpcError> {
    let raw = request.params.clone().unwrap_or_else(|| json!({}));
    serde_json::from_value(raw).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
}

fn to_result<S: serde::Serialize>(value: &S) -> std::result::Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::new(INTERNAL_ERROR, e.to_string()))
}

fn tools_list() -> Value {
    let tools: Vec<ToolDescriptor> = catalog()
        .iter()
        .map(|spec| ToolDescriptor {
            name: spec.name,
            description: spec.description,
            input_schema: spec.input_schema(),
        })
        .collect();
    json!({ "tools": tools })
}

fn prompts_list() -> Value {
    let prompts: Vec<_> = prompts::PROMPTS.iter().map(|p| p.descriptor()).collect();
    json!({ "prompts": prompts })
}
