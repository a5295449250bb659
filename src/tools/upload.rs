//! Media upload tool
//!
//! Implements the `media_upload` MCP tool: stat the local file, derive the
//! MIME type from the extension, request a signed upload URL, read the file
//! and PUT the bytes to the signed URL. Unlike every other tool, failures do
//! not propagate as failed invocations: the hosting runtime expects a
//! returned value, so every internal error is converted into a
//! `{success: false, error}` payload.
//!
//! There is no retry, no streaming, and no cleanup of an orphaned signed
//! URL when the PUT fails after it was issued.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::api::dto::{CreateUploadUrlDto, MimeType, UploadUrlResponse};
use crate::api::MediaApi;
use crate::cli::MediaUploadArgs;
use crate::error::AppError;
use crate::http;
use crate::mcp::{McpResponse, ToolResult};
use crate::tools::util::{into_response, parse_args};

/// Successful upload record returned to the caller
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    pub media_id: String,
    pub file_name: String,
    pub mime_type: MimeType,
    pub size_bytes: u64,
    pub success: bool,
}

pub async fn handle_upload(id: Option<Value>, args: Value, api: &MediaApi) -> McpResponse {
    // Argument validation still fails the invocation; only errors inside the
    // upload sequence itself are swallowed into the result payload.
    let result = match parse_args::<MediaUploadArgs>(args) {
        Ok(upload_args) => Ok(execute_upload(upload_args, api).await),
        Err(e) => Err(e),
    };
    into_response(id, result)
}

/// Execute the upload. Never fails past its own boundary.
pub async fn execute_upload(args: MediaUploadArgs, api: &MediaApi) -> ToolResult {
    let payload = match upload_file(&args.file_path, api).await {
        Ok(outcome) => serde_json::to_value(outcome).unwrap(),
        Err(e) => serde_json::json!({ "success": false, "error": e.message() }),
    };
    ToolResult::text(payload.to_string())
}

async fn upload_file(file_path: &str, api: &MediaApi) -> Result<UploadOutcome, AppError> {
    let path = Path::new(file_path);

    let metadata = tokio::fs::metadata(path).await?;
    let size_bytes = metadata.len();

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::InvalidInput(format!("cannot determine file name from path: {}", file_path))
        })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let mime_type = MimeType::from_extension(&ext).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "Unsupported file type: .{}. Supported types: .png, .jpg, .jpeg, .mp4, .mov",
            ext
        ))
    })?;

    debug!("Requesting upload URL for {} ({} bytes)", file_name, size_bytes);

    let created = api
        .create_upload_url(&CreateUploadUrlDto {
            name: file_name.clone(),
            mime_type,
            size_bytes,
        })
        .await?;
    let target: UploadUrlResponse = serde_json::from_value(created)
        .map_err(|e| AppError::Parse(format!("unexpected create-upload-url response: {}", e)))?;

    // Whole file in memory; the API caps upload sizes well below anything
    // worth streaming here.
    let content = tokio::fs::read(path).await?;

    let client = http::client_with_timeout(http::DEFAULT_TIMEOUT);
    let response = client
        .put(&target.upload_url)
        .header(reqwest::header::CONTENT_TYPE, mime_type.as_str())
        .body(content)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Api(format!(
            "Upload failed with status {}: {}",
            status, body
        )));
    }

    info!("Uploaded {} as media {}", file_name, target.media_id);

    Ok(UploadOutcome {
        media_id: target.media_id,
        file_name,
        mime_type,
        size_bytes,
        success: true,
    })
}
