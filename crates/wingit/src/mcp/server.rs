//! Line-delimited JSON-RPC loop and method dispatch

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use super::protocol::{
    methods, InitializeResult, McpError, McpRequest, McpResponse, PromptsGetParams,
    PromptsListResult, ResourcesListResult, ResourcesReadParams, ServerCapabilities, ServerInfo,
    ToolsCallParams, ToolsListResult, JSONRPC_VERSION, MCP_PROTOCOL_VERSION,
};
use super::{prompts, resources, tools};
use crate::app::App;

pub const SERVER_NAME: &str = "wingit";

pub struct McpServer {
    app: App,
    initialized: bool,
}

impl McpServer {
    pub fn new(app: App) -> Self {
        Self {
            app,
            initialized: false,
        }
    }

    /// Serve until `reader` hits EOF
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("MCP server listening on stdio");
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_message(&line).await {
                let mut out = serde_json::to_string(&response)?;
                out.push('\n');
                writer.write_all(out.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        info!("stdin closed, MCP server exiting");
        Ok(())
    }

    /// Handle one message; notifications yield no response
    pub async fn handle_message(&mut self, text: &str) -> Option<McpResponse> {
        let request: McpRequest = match serde_json::from_str(text) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "unparseable MCP message");
                return Some(McpResponse::error(
                    None,
                    McpError::ParseError(e.to_string()),
                ));
            }
        };

        let Some(request_id) = request.id.clone() else {
            if request.method == methods::INITIALIZED {
                self.initialized = true;
            }
            debug!(method = %request.method, "notification");
            return None;
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(McpResponse::error(
                Some(request_id),
                McpError::InvalidRequest(format!("unsupported jsonrpc {:?}", request.jsonrpc)),
            ));
        }

        debug!(method = %request.method, "request");
        let result = match request.method.as_str() {
            methods::INITIALIZE => self.handle_initialize(),
            methods::PING => Ok(json!({})),
            methods::TOOLS_LIST
            | methods::TOOLS_CALL
            | methods::PROMPTS_LIST
            | methods::PROMPTS_GET
            | methods::RESOURCES_LIST
            | methods::RESOURCES_READ
                if !self.initialized =>
            {
                Err(McpError::InvalidRequest("Not initialized".to_string()))
            }
            methods::TOOLS_LIST => to_value(ToolsListResult {
                tools: tools::definitions(),
            }),
            methods::TOOLS_CALL => self.handle_tools_call(&request).await,
            methods::PROMPTS_LIST => to_value(PromptsListResult {
                prompts: prompts::definitions(),
            }),
            methods::PROMPTS_GET => parse_params::<PromptsGetParams>(&request)
                .and_then(|params| prompts::get(&params.name, &params.arguments))
                .and_then(to_value),
            methods::RESOURCES_LIST => to_value(ResourcesListResult {
                resources: resources::definitions(),
            }),
            methods::RESOURCES_READ => parse_params::<ResourcesReadParams>(&request)
                .and_then(|params| resources::read(&self.app, &params.uri))
                .and_then(to_value),
            other => Err(McpError::MethodNotFound(other.to_string())),
        };

        Some(match result {
            Ok(value) => McpResponse::success(request_id, value),
            Err(error) => McpResponse::error(Some(request_id), error),
        })
    }

    fn handle_initialize(&mut self) -> Result<Value, McpError> {
        // Clients follow up with notifications/initialized; accept requests
        // from here on either way.
        self.initialized = true;

        to_value(InitializeResult {
            protocol_version: MCP_PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: json!({}),
                prompts: json!({}),
                resources: json!({}),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        })
    }

    async fn handle_tools_call(&self, request: &McpRequest) -> Result<Value, McpError> {
        let params: ToolsCallParams = parse_params(request)?;
        let arguments = params.arguments.unwrap_or_else(|| json!({}));
        let result = tools::call(&self.app, &params.name, arguments).await?;
        to_value(result)
    }
}

fn parse_params<T: serde::de::DeserializeOwned>(request: &McpRequest) -> Result<T, McpError> {
    request
        .params
        .clone()
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| McpError::InvalidParams(e.to_string()))?
        .ok_or_else(|| McpError::InvalidParams("Missing params".to_string()))
}

fn to_value<T: serde::Serialize>(value: T) -> Result<Value, McpError> {
    serde_json::to_value(value).map_err(|e| McpError::InternalError(e.to_string()))
}
