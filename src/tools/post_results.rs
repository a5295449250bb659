//! Post results tools
//!
//! Implements the `postResults_list` and `postResults_get` MCP tools.
//! Outcome records are read-only; both tools forward the remote response
//! verbatim.

use serde_json::Value;

use crate::api::PostResultsApi;
use crate::cli::{PostResultsGetArgs, PostResultsListArgs};
use crate::error::{validate_filter, validate_limit, validate_string_id, AppError};
use crate::mcp::{McpResponse, ToolResult};
use crate::tools::util::{forward, into_response, parse_args};

pub async fn handle_list(id: Option<Value>, args: Value, api: &PostResultsApi) -> McpResponse {
    let result = match parse_args::<PostResultsListArgs>(args) {
        Ok(list_args) => execute_list(list_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_list(
    args: PostResultsListArgs,
    api: &PostResultsApi,
) -> Result<ToolResult, AppError> {
    let offset = args.offset.unwrap_or(0);
    let limit = args.limit.unwrap_or(50);
    validate_limit(limit)?;
    validate_filter("postId", args.post_id.as_ref())?;
    validate_filter("platform", args.platform.as_ref())?;

    let response = api
        .list(offset, limit, args.post_id.as_deref(), args.platform.as_deref())
        .await?;
    Ok(forward(response))
}

pub async fn handle_get(id: Option<Value>, args: Value, api: &PostResultsApi) -> McpResponse {
    let result = match parse_args::<PostResultsGetArgs>(args) {
        Ok(get_args) => execute_get(get_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_get(
    args: PostResultsGetArgs,
    api: &PostResultsApi,
) -> Result<ToolResult, AppError> {
    validate_string_id(&args.id, "Post Result ID")?;
    let response = api.get(&args.id).await?;
    Ok(forward(response))
}
