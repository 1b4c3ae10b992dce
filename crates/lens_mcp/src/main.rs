//! MCP Server Binary Entry Point
//!
//! This binary implements a JSON-RPC 2.0 server over stdin/stdout
//! following the Model Context Protocol (MCP) specification.

use lens_mcp::ServerState;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;

fn main() {
    // Initialize tracing to stderr only (stdout reserved for JSON-RPC)
    lens_common::telemetry::init_tracing(false, false);

    tracing::info!("TextLens MCP server starting...");

    let workspace = std::env::var("TEXTLENS_WORKSPACE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_default());

    let state = match ServerState::new(&workspace) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open document store: {}", e);
            std::process::exit(lens_common::EXIT_CONFIG_ERROR);
        }
    };

    // First run against an empty workspace gets the bundled samples
    match state.seed_if_empty() {
        Ok(0) => {}
        Ok(n) => tracing::info!("Seeded {} sample documents", n),
        Err(e) => tracing::warn!("Sample seeding failed: {}", e),
    }

    // Create tokio runtime for async request handling
    let rt = Runtime::new().expect("Failed to create Tokio runtime");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();

    // Read requests from stdin line by line
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                break;
            }
        };

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        tracing::debug!("Received: {}", line);

        // Parse JSON-RPC request
        let request: lens_mcp::JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(req) => req,
            Err(e) => {
                tracing::error!("Failed to parse request: {}", e);
                let error_response = serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": null,
                    "error": {
                        "code": -32700,
                        "message": format!("Parse error: {}", e)
                    }
                });
                if let Err(e) = writeln!(stdout_lock, "{}", error_response) {
                    tracing::error!("Failed to write error response: {}", e);
                    break;
                }
                if let Err(e) = stdout_lock.flush() {
                    tracing::error!("Failed to flush stdout: {}", e);
                    break;
                }
                continue;
            }
        };

        // Handle request (notifications don't get responses)
        let response = rt.block_on(lens_mcp::handle_request(&state, request));

        if let Some(resp) = response {
            let response_json = match serde_json::to_string(&resp) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize response: {}", e);
                    continue;
                }
            };

            tracing::debug!("Sending: {}", response_json);

            if let Err(e) = writeln!(stdout_lock, "{}", response_json) {
                tracing::error!("Failed to write response: {}", e);
                break;
            }

            if let Err(e) = stdout_lock.flush() {
                tracing::error!("Failed to flush stdout: {}", e);
                break;
            }
        }
    }

    tracing::info!("TextLens MCP server shutting down");
}
