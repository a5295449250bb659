//! Social accounts tools
//!
//! Implements the `socialAccounts_list` and `socialAccounts_get` MCP tools.
//! Accounts are read-only from this side; both tools forward the remote
//! response verbatim.

use serde_json::Value;
use tracing::debug;

use crate::api::SocialAccountsApi;
use crate::cli::{SocialAccountsGetArgs, SocialAccountsListArgs};
use crate::error::{validate_filter, validate_limit, validate_numeric_id, AppError};
use crate::mcp::{McpResponse, ToolResult};
use crate::tools::util::{forward, into_response, parse_args};

pub async fn handle_list(id: Option<Value>, args: Value, api: &SocialAccountsApi) -> McpResponse {
    let result = match parse_args::<SocialAccountsListArgs>(args) {
        Ok(list_args) => execute_list(list_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_list(
    args: SocialAccountsListArgs,
    api: &SocialAccountsApi,
) -> Result<ToolResult, AppError> {
    let offset = args.offset.unwrap_or(0);
    let limit = args.limit.unwrap_or(50);
    validate_limit(limit)?;
    validate_filter("platform", args.platform.as_ref())?;
    validate_filter("username", args.username.as_ref())?;

    debug!("Listing social accounts (offset {}, limit {})", offset, limit);

    let response = api
        .list(offset, limit, args.platform.as_deref(), args.username.as_deref())
        .await?;
    Ok(forward(response))
}

pub async fn handle_get(id: Option<Value>, args: Value, api: &SocialAccountsApi) -> McpResponse {
    let result = match parse_args::<SocialAccountsGetArgs>(args) {
        Ok(get_args) => execute_get(get_args, api).await,
        Err(e) => Err(e),
    };
    into_response(id, result)
}

pub async fn execute_get(
    args: SocialAccountsGetArgs,
    api: &SocialAccountsApi,
) -> Result<ToolResult, AppError> {
    validate_numeric_id(args.id, "Social Account ID")?;
    let response = api.get(args.id).await?;
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
    async fn test_limit_out_of_range_fails_before_any_call() {
        let args: SocialAccountsListArgs =
            serde_json::from_value(json!({ "limit": 201 })).unwrap();
        let err = execute_list(args, &api().social_accounts).await.unwrap_err();
        assert_eq!(err.error_code(), "invalid_input");

        let args: SocialAccountsListArgs = serde_json::from_value(json!({ "limit": 0 })).unwrap();
        let err = execute_list(args, &api().social_accounts).await.unwrap_err();
        assert_eq!(err.error_code(), "invalid_input");
    }

    #[tokio::test]
    async fn test_empty_filter_array_rejected() {
        let args: SocialAccountsListArgs =
            serde_json::from_value(json!({ "platform": [] })).unwrap();
        let err = execute_list(args, &api().social_accounts).await.unwrap_err();
        assert!(err.message().contains("platform"));
    }

    #[tokio::test]
    async fn test_zero_id_rejected() {
        let err = execute_get(SocialAccountsGetArgs { id: 0 }, &api().social_accounts)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "invalid_input");
    }
}
