//! Posts tools
//!
//! Implements the `posts_list`, `posts_get`, `posts_create`, `posts_update`
//! and `posts_delete` MCP tools. Create and update translate the validated
//! argument bag field by field into the request DTO; optional fields the
//! caller did not supply are omitted, never nulled.

use serde_json::Value;
use tracing::{debug, info};

use crate::api::dto::{CreatePostDto, UpdatePostDto};
use crate::api::PostsApi;
use crate::cli::{PostsCreateArgs, PostsDeleteArgs, PostsGetArgs, PostsListArgs, PostsUpdateArgs};
use crate::error::{
    validate_caption, validate_filter, validate_limit, validate_media_urls,
    validate_social_accounts, validate_string_id, AppError,
};
use crate::mcp::{McpResponse, ToolResult};
use crate::tools::util::{forward, into_response, parse_args};

pub async fn handle_list(id: Option<Value>, args: Value, api: &PostsApi) -> McpResponse {
    let result = match parse_args::<PostsListArgs>(args) {
        Ok(list_args) => execute_list(list_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_list(args: PostsListArgs, api: &PostsApi) -> Result<ToolResult, AppError> {
    let offset = args.offset.unwrap_or(0);
    let limit = args.limit.unwrap_or(50);
    validate_limit(limit)?;
    validate_filter("platform", args.platform.as_ref())?;
    validate_filter("status", args.status.as_ref())?;

    let response = api
        .list(offset, limit, args.platform.as_deref(), args.status.as_deref())
        .await?;
    Ok(forward(response))
}

pub async fn handle_get(id: Option<Value>, args: Value, api: &PostsApi) -> McpResponse {
    let result = match parse_args::<PostsGetArgs>(args) {
        Ok(get_args) => execute_get(get_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_get(args: PostsGetArgs, api: &PostsApi) -> Result<ToolResult, AppError> {
    validate_string_id(&args.id, "Post ID")?;
    let response = api.get(&args.id).await?;
    Ok(forward(response))
}

pub async fn handle_create(id: Option<Value>, args: Value, api: &PostsApi) -> McpResponse {
    let result = match parse_args::<PostsCreateArgs>(args) {
        Ok(create_args) => execute_create(create_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

/// Creates a post on the remote platform. Not idempotent: calling twice
/// with identical arguments creates two posts.
pub async fn execute_create(args: PostsCreateArgs, api: &PostsApi) -> Result<ToolResult, AppError> {
    validate_caption(&args.caption)?;
    validate_social_accounts(&args.social_accounts)?;
    if let Some(urls) = &args.media_urls {
        validate_media_urls(urls)?;
    }
    if let Some(configs) = &args.platform_configurations {
        configs.validate()?;
    }

    let dto = build_create_dto(args);
    info!(
        "Creating post for {} social account(s)",
        dto.social_accounts.len()
    );

    let response = api.create(&dto).await?;
    Ok(forward(response))
}

/// Map create arguments onto the creation DTO. `mediaUrls` is dropped
/// whenever `media` is also supplied; the remote ignores it in that case and
/// the original surface never warned about it either.
fn build_create_dto(args: PostsCreateArgs) -> CreatePostDto {
    let media_urls = if args.media.is_some() { None } else { args.media_urls };
    CreatePostDto {
        caption: args.caption,
        social_accounts: args.social_accounts,
        scheduled_at: args.scheduled_at,
        platform_configurations: args.platform_configurations,
        account_configurations: args.account_configurations,
        media: args.media,
        media_urls,
        is_draft: args.is_draft,
        processing_enabled: args.processing_enabled,
    }
}

pub async fn handle_update(id: Option<Value>, args: Value, api: &PostsApi) -> McpResponse {
    let result = match parse_args::<PostsUpdateArgs>(args) {
        Ok(update_args) => execute_update(update_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_update(args: PostsUpdateArgs, api: &PostsApi) -> Result<ToolResult, AppError> {
    validate_string_id(&args.id, "Post ID")?;
    if let Some(accounts) = &args.social_accounts {
        validate_social_accounts(accounts)?;
    }
    if let Some(urls) = &args.media_urls {
        validate_media_urls(urls)?;
    }
    if let Some(configs) = &args.platform_configurations {
        configs.validate()?;
    }

    let post_id = args.id.clone();
    let dto = build_update_dto(args);
    debug!("Updating post {}", post_id);

    let response = api.update(&post_id, &dto).await?;
    Ok(forward(response))
}

/// Map update arguments onto the patch DTO. Omitted fields stay omitted;
/// `scheduledAt` keeps its three distinguishable states.
fn build_update_dto(args: PostsUpdateArgs) -> UpdatePostDto {
    let media_urls = if args.media.is_some() { None } else { args.media_urls };
    UpdatePostDto {
        caption: args.caption,
        scheduled_at: args.scheduled_at,
        platform_configurations: args.platform_configurations,
        account_configurations: args.account_configurations,
        media: args.media,
        media_urls,
        social_accounts: args.social_accounts,
        is_draft: args.is_draft,
        processing_enabled: args.processing_enabled,
    }
}

pub async fn handle_delete(id: Option<Value>, args: Value, api: &PostsApi) -> McpResponse {
    let result = match parse_args::<PostsDeleteArgs>(args) {
        Ok(delete_args) => execute_delete(delete_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_delete(args: PostsDeleteArgs, api: &PostsApi) -> Result<ToolResult, AppError> {
    validate_string_id(&args.id, "Post ID")?;
    let response = api.delete(&args.id).await?;
    Ok(forward(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::ScheduledAtPatch;
    use crate::api::Api;
    use crate::config::ApiConfig;
    use serde_json::json;

    fn api() -> Api {
        Api::new(&ApiConfig::new("https://api.post-bridge.invalid", "pb_test")).unwrap()
    }

    #[tokio::test]
    async fn test_create_empty_caption_fails_validation() {
        let args: PostsCreateArgs =
            serde_json::from_value(json!({ "caption": "", "socialAccounts": [1] })).unwrap();
        let err = execute_create(args, &api().posts).await.unwrap_err();
        assert_eq!(err.error_code(), "invalid_input");
        assert!(err.message().contains("caption"));
    }

    #[tokio::test]
    async fn test_create_empty_social_accounts_fails_validation() {
        let args: PostsCreateArgs =
            serde_json::from_value(json!({ "caption": "hi", "socialAccounts": [] })).unwrap();
        let err = execute_create(args, &api().posts).await.unwrap_err();
        assert!(err.message().contains("socialAccounts"));
    }

    #[tokio::test]
    async fn test_create_invalid_media_url_fails_validation() {
        let args: PostsCreateArgs = serde_json::from_value(json!({
            "caption": "hi",
            "socialAccounts": [1],
            "mediaUrls": ["not a url"]
        }))
        .unwrap();
        let err = execute_create(args, &api().posts).await.unwrap_err();
        assert!(err.message().contains("mediaUrls"));
    }

    #[tokio::test]
    async fn test_update_bad_pinterest_link_fails_validation() {
        let args: PostsUpdateArgs = serde_json::from_value(json!({
            "id": "post_1",
            "platformConfigurations": { "pinterest": { "link": "::nope::" } }
        }))
        .unwrap();
        let err = execute_update(args, &api().posts).await.unwrap_err();
        assert!(err.message().contains("pinterest.link"));
    }

    #[test]
    fn test_create_dto_contains_exactly_supplied_fields() {
        let args: PostsCreateArgs = serde_json::from_value(json!({
            "caption": "hello",
            "socialAccounts": [1, 2],
            "isDraft": true
        }))
        .unwrap();
        let value = serde_json::to_value(build_create_dto(args)).unwrap();
        assert_eq!(
            value,
            json!({ "caption": "hello", "socialAccounts": [1, 2], "isDraft": true })
        );
    }

    #[test]
    fn test_create_dto_drops_media_urls_when_media_present() {
        let args: PostsCreateArgs = serde_json::from_value(json!({
            "caption": "hello",
            "socialAccounts": [1],
            "media": ["med_1"],
            "mediaUrls": ["https://example.com/a.png"]
        }))
        .unwrap();
        let dto = build_create_dto(args);
        assert_eq!(dto.media, Some(vec!["med_1".to_string()]));
        assert!(dto.media_urls.is_none());
    }

    #[test]
    fn test_create_dto_keeps_media_urls_without_media() {
        let args: PostsCreateArgs = serde_json::from_value(json!({
            "caption": "hello",
            "socialAccounts": [1],
            "mediaUrls": ["https://example.com/a.png"]
        }))
        .unwrap();
        let dto = build_create_dto(args);
        assert_eq!(dto.media_urls, Some(vec!["https://example.com/a.png".to_string()]));
    }

    #[test]
    fn test_update_dto_omitted_fields_stay_absent() {
        let args: PostsUpdateArgs =
            serde_json::from_value(json!({ "id": "post_1", "caption": "new" })).unwrap();
        let value = serde_json::to_value(build_update_dto(args)).unwrap();
        assert_eq!(value, json!({ "caption": "new" }));
    }

    #[test]
    fn test_update_dto_distinguishes_clear_from_omitted() {
        let cleared: PostsUpdateArgs =
            serde_json::from_value(json!({ "id": "post_1", "scheduledAt": null })).unwrap();
        assert_eq!(cleared.scheduled_at, ScheduledAtPatch::Clear);
        let cleared_value = serde_json::to_value(build_update_dto(cleared)).unwrap();
        assert_eq!(cleared_value, json!({ "scheduledAt": null }));

        let omitted: PostsUpdateArgs =
            serde_json::from_value(json!({ "id": "post_1" })).unwrap();
        let omitted_value = serde_json::to_value(build_update_dto(omitted)).unwrap();
        assert_eq!(omitted_value, json!({}));
    }
}
