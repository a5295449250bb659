//! Shared plumbing for tool handlers

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;
use crate::mcp::{McpResponse, ToolResult};

/// Parse a tool-call argument bag into its typed argument struct
pub(crate) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, AppError> {
    serde_json::from_value(args).map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))
}

/// Convert a tool execution outcome into an MCP response
pub(crate) fn into_response(id: Option<Value>, result: Result<ToolResult, AppError>) -> McpResponse {
    match result {
        Ok(content) => McpResponse::success(id, serde_json::to_value(content).unwrap()),
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

/// Forward a remote response verbatim as a text content item
pub(crate) fn forward(value: Value) -> ToolResult {
    ToolResult::text(value.to_string())
}
