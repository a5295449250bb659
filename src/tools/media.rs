//! Media tools
//!
//! Implements the `media_list`, `media_get`, `media_delete` and
//! `media_createUploadUrl` MCP tools. The multi-step local upload lives in
//! `tools::upload`.

use serde_json::Value;

use crate::api::dto::CreateUploadUrlDto;
use crate::api::MediaApi;
use crate::cli::{MediaCreateUploadUrlArgs, MediaDeleteArgs, MediaGetArgs, MediaListArgs};
use crate::error::{
    validate_filter, validate_limit, validate_numeric_id, validate_string_id, AppError,
};
use crate::mcp::{McpResponse, ToolResult};
use crate::tools::util::{forward, into_response, parse_args};

pub async fn handle_list(id: Option<Value>, args: Value, api: &MediaApi) -> McpResponse {
    let result = match parse_args::<MediaListArgs>(args) {
        Ok(list_args) => execute_list(list_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_list(args: MediaListArgs, api: &MediaApi) -> Result<ToolResult, AppError> {
    let offset = args.offset.unwrap_or(0);
    let limit = args.limit.unwrap_or(50);
    validate_limit(limit)?;
    validate_filter("postId", args.post_id.as_ref())?;
    validate_filter("type", args.r#type.as_ref())?;

    let response = api
        .list(offset, limit, args.post_id.as_deref(), args.r#type.as_deref())
        .await?;
    Ok(forward(response))
}

pub async fn handle_get(id: Option<Value>, args: Value, api: &MediaApi) -> McpResponse {
    let result = match parse_args::<MediaGetArgs>(args) {
        Ok(get_args) => execute_get(get_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_get(args: MediaGetArgs, api: &MediaApi) -> Result<ToolResult, AppError> {
    validate_string_id(&args.id, "Media ID")?;
    let response = api.get(&args.id).await?;
    Ok(forward(response))
}

pub async fn handle_delete(id: Option<Value>, args: Value, api: &MediaApi) -> McpResponse {
    let result = match parse_args::<MediaDeleteArgs>(args) {
        Ok(delete_args) => execute_delete(delete_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_delete(args: MediaDeleteArgs, api: &MediaApi) -> Result<ToolResult, AppError> {
    validate_string_id(&args.id, "Media ID")?;
    let response = api.delete(&args.id).await?;
    Ok(forward(response))
}

pub async fn handle_create_upload_url(
    id: Option<Value>,
    args: Value,
    api: &MediaApi,
) -> McpResponse {
    let result = match parse_args::<MediaCreateUploadUrlArgs>(args) {
        Ok(url_args) => execute_create_upload_url(url_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_create_upload_url(
    args: MediaCreateUploadUrlArgs,
    api: &MediaApi,
) -> Result<ToolResult, AppError> {
    validate_string_id(&args.name, "File name")?;
    validate_numeric_id(args.size_bytes, "sizeBytes")?;

    let dto = CreateUploadUrlDto {
        name: args.name,
        mime_type: args.mime_type,
        size_bytes: args.size_bytes,
    };
    let response = api.create_upload_url(&dto).await?;
    Ok(forward(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Api;
    use crate::config::ApiConfig;
    use serde_json::json;

    fn api() -> Api {
        Api::new(&ApiConfig::new("https://api.post-bridge.invalid", "pb_test")).unwrap()
    }

    #[tokio::test]
    async fn test_zero_size_rejected() {
        let args: MediaCreateUploadUrlArgs = serde_json::from_value(json!({
            "name": "a.png",
            "mimeType": "image/png",
            "sizeBytes": 0
        }))
        .unwrap();
        let err = execute_create_upload_url(args, &api().media).await.unwrap_err();
        assert_eq!(err.error_code(), "invalid_input");
    }

    #[test]
    fn test_unknown_mime_type_rejected_at_parse() {
        let result: Result<MediaCreateUploadUrlArgs, _> = serde_json::from_value(json!({
            "name": "a.webp",
            "mimeType": "image/webp",
            "sizeBytes": 10
        }));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_type_filter_empty_rejected() {
        let args: MediaListArgs = serde_json::from_value(json!({ "type": [] })).unwrap();
        let err = execute_list(args, &api().media).await.unwrap_err();
        assert!(err.message().contains("type"));
    }
}
