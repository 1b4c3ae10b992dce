//! MCP (Model Context Protocol) server implementation
//!
//! JSON-RPC 2.0 over stdio. The dispatcher owns a single `DocumentStore`
//! constructed at startup and threaded through every call.
//!
//! CRITICAL: stdout is reserved EXCLUSIVELY for JSON-RPC responses.
//! All logs (Info/Warn/Error) MUST go to stderr to avoid protocol corruption.

pub mod tools;

use lens_common::{LensError, Result};
use lens_config::Config;
use lens_core::store::DocumentStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Mutex;

pub use tools::{dispatch, tool_descriptors, ToolCall, ToolResponse};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "textlens";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON-RPC request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

/// JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    fn ok(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC error object
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Convert LensError to a JSON-RPC error with a stable code
    pub fn from_lens_error(err: &LensError) -> Self {
        let code = match err {
            LensError::NotFound { .. } => 1001,
            LensError::StorageFailure(_) => 1002,
            LensError::UnknownTool { .. }
            | LensError::MissingArgument { .. }
            | LensError::InvalidArgument(_) => -32602, // Invalid params
            LensError::ParseError(_) => -32700, // Parse error
            _ => -32603,                        // Internal error
        };

        let message = err.to_string();

        // Structured data for errors the caller can act on
        let data = match err {
            LensError::NotFound { id } => Some(json!({ "document_id": id })),
            LensError::MissingArgument { tool, argument } => {
                Some(json!({ "tool": tool, "argument": argument }))
            }
            _ => None,
        };

        Self {
            code,
            message,
            data,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {}", method),
            data: None,
        }
    }
}

/// Long-lived server state: config plus the owned document store.
///
/// The store is wrapped in a `Mutex` so every tool call sees a serialized
/// read-modify-write of the index, even if the transport overlaps calls.
pub struct ServerState {
    config: Config,
    store: Mutex<DocumentStore>,
}

impl ServerState {
    /// Build state for a workspace root: load config, open the store
    pub fn new(workspace_root: &Path) -> Result<Self> {
        let config = Config::load(workspace_root)?;
        let store = DocumentStore::open(&config.documents_dir())?;
        Ok(Self {
            config,
            store: Mutex::new(store),
        })
    }

    /// Install bundled sample documents when the store is empty
    pub fn seed_if_empty(&self) -> Result<usize> {
        self.store
            .lock()
            .expect("store mutex poisoned")
            .seed_samples()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Handle a single JSON-RPC request. Returns `None` for notifications,
/// which by contract receive no response.
pub async fn handle_request(state: &ServerState, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    tracing::info!(target: "mcp", method = %request.method, "Handling MCP request");

    if request.method.starts_with("notifications/") {
        return None;
    }

    let response = match request.method.as_str() {
        "initialize" => JsonRpcResponse::ok(request.id, initialize_result()),
        "ping" => JsonRpcResponse::ok(request.id, Value::String("pong".to_string())),
        "tools/list" => JsonRpcResponse::ok(request.id, json!({ "tools": tool_descriptors() })),
        "tools/call" => handle_tool_call(state, request.id, request.params),
        other => JsonRpcResponse::err(request.id, JsonRpcError::method_not_found(other)),
    };

    Some(response)
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        }
    })
}

fn handle_tool_call(
    state: &ServerState,
    id: Option<Value>,
    params: Option<Value>,
) -> JsonRpcResponse {
    #[derive(Deserialize)]
    struct ToolCallParams {
        name: String,
        #[serde(default)]
        arguments: Value,
    }

    let params: ToolCallParams = match params
        .ok_or_else(|| LensError::InvalidArgument("Missing params".to_string()))
        .and_then(|v| {
            serde_json::from_value(v)
                .map_err(|e| LensError::InvalidArgument(format!("Invalid params: {}", e)))
        }) {
        Ok(p) => p,
        Err(e) => return JsonRpcResponse::err(id, JsonRpcError::from_lens_error(&e)),
    };

    let result = ToolCall::parse(&params.name, &params.arguments).and_then(|call| {
        let tool = call.name();
        let mut store = state.store.lock().expect("store mutex poisoned");
        let value = dispatch(&mut store, &state.config, call)?;
        Ok(serde_json::to_value(ToolResponse::success(tool, value))?)
    });

    match result {
        Ok(envelope) => {
            // MCP wraps tool output as a single text content block
            let text = serde_json::to_string_pretty(&envelope).unwrap_or_default();
            JsonRpcResponse::ok(
                id,
                json!({
                    "content": [ { "type": "text", "text": text } ]
                }),
            )
        }
        Err(e) => {
            tracing::warn!(tool = %params.name, error = %e, "Tool call failed");
            JsonRpcResponse::err(id, JsonRpcError::from_lens_error(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (assert_fs::TempDir, ServerState) {
        let temp = assert_fs::TempDir::new().unwrap();
        let state = ServerState::new(temp.path()).unwrap();
        (temp, state)
    }

    #[tokio::test]
    async fn test_ping() {
        let (_temp, state) = state();
        let req = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(Value::Number(1.into())),
            method: "ping".to_string(),
            params: None,
        };

        let resp = handle_request(&state, req).await.unwrap();
        assert_eq!(resp.result.unwrap(), Value::String("pong".to_string()));
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let (_temp, state) = state();
        let req = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "notifications/initialized".to_string(),
            params: None,
        };

        assert!(handle_request(&state, req).await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let (_temp, state) = state();
        let req = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(Value::Number(7.into())),
            method: "resources/list".to_string(),
            params: None,
        };

        let resp = handle_request(&state, req).await.unwrap();
        assert_eq!(resp.error.unwrap().code, -32601);
    }
}
