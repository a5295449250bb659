//! MCP (Model Context Protocol) handling module
//!
//! This module implements the JSON-RPC 2.0 protocol for MCP communication.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader as AsyncBufReader};
use tracing::{debug, error, info};

use crate::api::Api;

/// MCP JSON-RPC 2.0 request structure
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    /// JSON-RPC version field - required by spec but not accessed in code
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

/// MCP JSON-RPC 2.0 response structure
#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

/// MCP Error structure
#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: String,
    pub message: String,
}

/// MCP Tool call arguments
#[derive(Debug, Deserialize)]
pub struct ToolCallArgs {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// MCP Content item
#[derive(Debug, Serialize)]
pub struct ContentItem {
    pub r#type: String,
    pub text: String,
}

/// MCP Tool result
#[derive(Debug, Serialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
}

impl McpResponse {
    /// Create a successful response
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Option<Value>, code: &str, message: &str) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(McpError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

impl ToolResult {
    /// Create a text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem {
                r#type: "text".to_string(),
                text: content.into(),
            }],
        }
    }
}

/// Parse MCP request from JSON string
pub fn parse_request(json: &str) -> Result<McpRequest> {
    let request: McpRequest = serde_json::from_str(json)?;
    Ok(request)
}

/// Serialize MCP response to JSON string
pub fn serialize_response(response: &McpResponse) -> Result<String> {
    Ok(serde_json::to_string(response)?)
}

/// Handle stdio MCP communication
pub async fn handle_stdio(api: Api) -> Result<()> {
    info!("Starting postbridge MCP server on stdio");

    let stdin = tokio::io::stdin();
    let mut reader = AsyncBufReader::new(stdin).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = reader.next_line().await? {
        debug!("Received request: {}", line);

        let response = match parse_request(&line) {
            Ok(request) => handle_request(request, &api).await,
            Err(e) => {
                error!("Failed to parse request: {}", e);
                McpResponse::error(None, "parse_error", &format!("Invalid JSON: {}", e))
            }
        };

        let response_json = serialize_response(&response)?;
        debug!("Sending response: {}", response_json);

        stdout.write_all(response_json.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}

/// Handle a single MCP request
async fn handle_request(request: McpRequest, api: &Api) -> McpResponse {
    match request.method.as_str() {
        "initialize" => handle_initialize(request).await,
        "tools/call" => handle_tool_call(request, api).await,
        "tools/list" => handle_tools_list(request).await,
        _ => McpResponse::error(
            request.id,
            "method_not_found",
            &format!("Method '{}' not found", request.method),
        ),
    }
}

/// Handle tools/call method
async fn handle_tool_call(request: McpRequest, api: &Api) -> McpResponse {
    let args: ToolCallArgs = match serde_json::from_value(request.params.unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            return McpResponse::error(
                request.id.clone(),
                "invalid_params",
                &format!("Invalid parameters: {}", e),
            )
        }
    };

    use crate::tools::{media, post_results, posts, social_accounts, upload};

    let id = request.id;
    let arguments = args.arguments;
    match args.name.as_str() {
        "socialAccounts_list" => social_accounts::handle_list(id, arguments, &api.social_accounts).await,
        "socialAccounts_get" => social_accounts::handle_get(id, arguments, &api.social_accounts).await,
        "posts_list" => posts::handle_list(id, arguments, &api.posts).await,
        "posts_get" => posts::handle_get(id, arguments, &api.posts).await,
        "posts_create" => posts::handle_create(id, arguments, &api.posts).await,
        "posts_update" => posts::handle_update(id, arguments, &api.posts).await,
        "posts_delete" => posts::handle_delete(id, arguments, &api.posts).await,
        "postResults_list" => post_results::handle_list(id, arguments, &api.post_results).await,
        "postResults_get" => post_results::handle_get(id, arguments, &api.post_results).await,
        "media_list" => media::handle_list(id, arguments, &api.media).await,
        "media_get" => media::handle_get(id, arguments, &api.media).await,
        "media_delete" => media::handle_delete(id, arguments, &api.media).await,
        "media_createUploadUrl" => media::handle_create_upload_url(id, arguments, &api.media).await,
        "media_upload" => upload::handle_upload(id, arguments, &api.media).await,
        _ => McpResponse::error(
            id,
            "tool_not_found",
            &format!("Tool '{}' not found", args.name),
        ),
    }
}

/// Handle tools/list method
async fn handle_tools_list(request: McpRequest) -> McpResponse {
    let tools = build_tools_array();

    McpResponse::success(request.id, serde_json::json!({ "tools": tools }))
}

/// Handle initialize method
async fn handle_initialize(request: McpRequest) -> McpResponse {
    let tools = build_tools_array();
    let result = serde_json::json!({
        "serverInfo": {
            "name": "postbridge",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "capabilities": {
            "tools": { "list": true, "call": true }
        },
        "tools": tools
    });
    McpResponse::success(request.id, result)
}

/// Build the tools array returned from tools/list and initialize
fn build_tools_array() -> serde_json::Value {
    use crate::cli::*;
    use schemars::schema_for;

    serde_json::json!([
        {
            "name": "socialAccounts_list",
            "description": "List social accounts from Post Bridge with optional filters: platform(s), username(s), and pagination.",
            "inputSchema": schema_for!(SocialAccountsListArgs)
        },
        {
            "name": "socialAccounts_get",
            "description": "Get a single social account by its numeric ID from Post Bridge.",
            "inputSchema": schema_for!(SocialAccountsGetArgs)
        },
        {
            "name": "posts_list",
            "description": "Get a paginated result for posts with optional platform and status filters.",
            "inputSchema": schema_for!(PostsListArgs)
        },
        {
            "name": "posts_get",
            "description": "Get a single post by ID.",
            "inputSchema": schema_for!(PostsGetArgs)
        },
        {
            "name": "posts_create",
            "description": "Create a new post. For local media files, use the media_upload tool first to get media IDs, then pass them here.",
            "inputSchema": schema_for!(PostsCreateArgs)
        },
        {
            "name": "posts_update",
            "description": "Update an existing post. If updating a 'scheduled' post, always pass 'scheduledAt' to keep the schedule.",
            "inputSchema": schema_for!(PostsUpdateArgs)
        },
        {
            "name": "posts_delete",
            "description": "Delete a post by ID.",
            "inputSchema": schema_for!(PostsDeleteArgs)
        },
        {
            "name": "postResults_list",
            "description": "Get a paginated result for post results with optional filters.",
            "inputSchema": schema_for!(PostResultsListArgs)
        },
        {
            "name": "postResults_get",
            "description": "Get a post result by ID.",
            "inputSchema": schema_for!(PostResultsGetArgs)
        },
        {
            "name": "media_createUploadUrl",
            "description": "Create a signed upload URL to upload media.",
            "inputSchema": schema_for!(MediaCreateUploadUrlArgs)
        },
        {
            "name": "media_delete",
            "description": "Delete media by ID.",
            "inputSchema": schema_for!(MediaDeleteArgs)
        },
        {
            "name": "media_get",
            "description": "Get media by ID.",
            "inputSchema": schema_for!(MediaGetArgs)
        },
        {
            "name": "media_list",
            "description": "Get a paginated result for media with optional filters.",
            "inputSchema": schema_for!(MediaListArgs)
        },
        {
            "name": "media_upload",
            "description": "Upload a media file from the local filesystem. Handles the entire upload process and returns the media ID.",
            "inputSchema": schema_for!(MediaUploadArgs)
        }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use serde_json::json;

    fn test_api() -> Api {
        Api::new(&ApiConfig::new("https://api.post-bridge.invalid", "pb_test")).unwrap()
    }

    #[tokio::test]
    async fn test_initialize_response_contains_fields() {
        let req = McpRequest {
            jsonrpc: "2.0".into(),
            id: Some(json!(1)),
            method: "initialize".into(),
            params: None,
        };
        let resp = handle_request(req, &test_api()).await;
        assert!(resp.error.is_none());
        let result = resp.result.expect("result present");
        assert_eq!(
            result
                .get("serverInfo")
                .and_then(|v| v.get("name"))
                .and_then(|v| v.as_str()),
            Some("postbridge")
        );
        assert_eq!(
            result
                .get("capabilities")
                .and_then(|v| v.get("tools"))
                .and_then(|v| v.get("list"))
                .and_then(|v| v.as_bool()),
            Some(true)
        );
        assert!(result.get("tools").and_then(|v| v.as_array()).is_some());
    }

    #[tokio::test]
    async fn test_tools_list_contains_all_fourteen_tools() {
        let req = McpRequest {
            jsonrpc: "2.0".into(),
            id: Some(json!(2)),
            method: "tools/list".into(),
            params: None,
        };
        let resp = handle_request(req, &test_api()).await;
        assert!(resp.error.is_none());
        let result = resp.result.expect("result present");
        let tools = result
            .get("tools")
            .and_then(|v| v.as_array())
            .expect("tools array");
        let names: Vec<&str> = tools
            .iter()
            .filter_map(|t| t.get("name").and_then(|n| n.as_str()))
            .collect();
        assert_eq!(names.len(), 14);
        for expected in [
            "socialAccounts_list",
            "socialAccounts_get",
            "posts_list",
            "posts_get",
            "posts_create",
            "posts_update",
            "posts_delete",
            "postResults_list",
            "postResults_get",
            "media_createUploadUrl",
            "media_delete",
            "media_get",
            "media_list",
            "media_upload",
        ] {
            assert!(names.contains(&expected), "missing tool {}", expected);
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_reports_tool_not_found() {
        let req = McpRequest {
            jsonrpc: "2.0".into(),
            id: Some(json!(3)),
            method: "tools/call".into(),
            params: Some(json!({ "name": "posts_publish", "arguments": {} })),
        };
        let resp = handle_request(req, &test_api()).await;
        let error = resp.error.expect("error present");
        assert_eq!(error.code, "tool_not_found");
    }

    #[tokio::test]
    async fn test_unknown_method_reports_method_not_found() {
        let req = McpRequest {
            jsonrpc: "2.0".into(),
            id: Some(json!(4)),
            method: "resources/list".into(),
            params: None,
        };
        let resp = handle_request(req, &test_api()).await;
        assert_eq!(resp.error.expect("error present").code, "method_not_found");
    }
}
