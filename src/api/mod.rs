//! Post Bridge API client facade
//!
//! One thin client per logical resource, all sharing a single authenticated
//! `ApiClient`. Responses are returned as raw `serde_json::Value` so tool
//! handlers can forward them verbatim.

pub mod dto;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::http;
use dto::{CreatePostDto, CreateUploadUrlDto, MediaType, Platform, PostStatus, UpdatePostDto};

/// Authenticated HTTP access to the Post Bridge API
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        // Validate the base URL once, up front
        url::Url::parse(&config.base_url)
            .map_err(|e| AppError::Config(format!("invalid base URL {}: {}", config.base_url, e)))?;

        Ok(Self {
            http: http::client_with_timeout(http::DEFAULT_TIMEOUT),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, AppError> {
        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Api(format!(
                "request failed with status {}: {}",
                status, body
            )));
        }
        if body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| AppError::Parse(format!("invalid JSON in API response: {}", e)))
    }

    pub async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, AppError> {
        debug!("GET {} {:?}", path, query);
        self.execute(self.http.get(self.endpoint(path)).query(query)).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        debug!("POST {}", path);
        self.execute(self.http.post(self.endpoint(path)).json(body)).await
    }

    pub async fn patch_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        debug!("PATCH {}", path);
        self.execute(self.http.patch(self.endpoint(path)).json(body)).await
    }

    pub async fn delete_json(&self, path: &str) -> Result<Value, AppError> {
        debug!("DELETE {}", path);
        self.execute(self.http.delete(self.endpoint(path))).await
    }
}

fn page_query(offset: u64, limit: u64) -> Vec<(String, String)> {
    vec![
        ("offset".to_string(), offset.to_string()),
        ("limit".to_string(), limit.to_string()),
    ]
}

/// Append a repeated query parameter for each filter value (OR semantics on
/// the remote side)
fn push_filter<T, F>(query: &mut Vec<(String, String)>, key: &str, values: Option<&[T]>, render: F)
where
    F: Fn(&T) -> String,
{
    if let Some(values) = values {
        for value in values {
            query.push((key.to_string(), render(value)));
        }
    }
}

#[derive(Clone)]
pub struct SocialAccountsApi {
    client: ApiClient,
}

impl SocialAccountsApi {
    pub async fn list(
        &self,
        offset: u64,
        limit: u64,
        platform: Option<&[String]>,
        username: Option<&[String]>,
    ) -> Result<Value, AppError> {
        let mut query = page_query(offset, limit);
        push_filter(&mut query, "platform", platform, |v| v.clone());
        push_filter(&mut query, "username", username, |v| v.clone());
        self.client.get_json("/v1/social-accounts", &query).await
    }

    pub async fn get(&self, id: u64) -> Result<Value, AppError> {
        self.client
            .get_json(&format!("/v1/social-accounts/{}", id), &[])
            .await
    }
}

#[derive(Clone)]
pub struct PostsApi {
    client: ApiClient,
}

impl PostsApi {
    pub async fn list(
        &self,
        offset: u64,
        limit: u64,
        platform: Option<&[Platform]>,
        status: Option<&[PostStatus]>,
    ) -> Result<Value, AppError> {
        let mut query = page_query(offset, limit);
        push_filter(&mut query, "platform", platform, |v| v.as_str().to_string());
        push_filter(&mut query, "status", status, |v| v.as_str().to_string());
        self.client.get_json("/v1/posts", &query).await
    }

    pub async fn get(&self, id: &str) -> Result<Value, AppError> {
        self.client.get_json(&format!("/v1/posts/{}", id), &[]).await
    }

    pub async fn create(&self, dto: &CreatePostDto) -> Result<Value, AppError> {
        self.client.post_json("/v1/posts", dto).await
    }

    pub async fn update(&self, id: &str, dto: &UpdatePostDto) -> Result<Value, AppError> {
        self.client.patch_json(&format!("/v1/posts/{}", id), dto).await
    }

    pub async fn delete(&self, id: &str) -> Result<Value, AppError> {
        self.client.delete_json(&format!("/v1/posts/{}", id)).await
    }
}

#[derive(Clone)]
pub struct PostResultsApi {
    client: ApiClient,
}

impl PostResultsApi {
    pub async fn list(
        &self,
        offset: u64,
        limit: u64,
        post_id: Option<&[String]>,
        platform: Option<&[String]>,
    ) -> Result<Value, AppError> {
        let mut query = page_query(offset, limit);
        push_filter(&mut query, "postId", post_id, |v| v.clone());
        push_filter(&mut query, "platform", platform, |v| v.clone());
        self.client.get_json("/v1/post-results", &query).await
    }

    pub async fn get(&self, id: &str) -> Result<Value, AppError> {
        self.client
            .get_json(&format!("/v1/post-results/{}", id), &[])
            .await
    }
}

#[derive(Clone)]
pub struct MediaApi {
    client: ApiClient,
}

impl MediaApi {
    pub async fn list(
        &self,
        offset: u64,
        limit: u64,
        post_id: Option<&[String]>,
        media_type: Option<&[MediaType]>,
    ) -> Result<Value, AppError> {
        let mut query = page_query(offset, limit);
        push_filter(&mut query, "postId", post_id, |v| v.clone());
        push_filter(&mut query, "type", media_type, |v| v.as_str().to_string());
        self.client.get_json("/v1/media", &query).await
    }

    pub async fn get(&self, id: &str) -> Result<Value, AppError> {
        self.client.get_json(&format!("/v1/media/{}", id), &[]).await
    }

    pub async fn delete(&self, id: &str) -> Result<Value, AppError> {
        self.client.delete_json(&format!("/v1/media/{}", id)).await
    }

    pub async fn create_upload_url(&self, dto: &CreateUploadUrlDto) -> Result<Value, AppError> {
        self.client.post_json("/v1/media/create-upload-url", dto).await
    }
}

/// All resource clients, built once from configuration and handed to tool
/// handlers (no process-global client state)
#[derive(Clone)]
pub struct Api {
    pub social_accounts: SocialAccountsApi,
    pub posts: PostsApi,
    pub post_results: PostResultsApi,
    pub media: MediaApi,
}

impl Api {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = ApiClient::new(config)?;
        Ok(Self {
            social_accounts: SocialAccountsApi { client: client.clone() },
            posts: PostsApi { client: client.clone() },
            post_results: PostResultsApi { client: client.clone() },
            media: MediaApi { client },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = ApiConfig::new("not a url", "token");
        assert!(ApiClient::new(&config).is_err());
    }

    #[test]
    fn test_endpoint_join_trims_trailing_slash() {
        let config = ApiConfig::new("https://api.post-bridge.com/", "token");
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint("/v1/posts"),
            "https://api.post-bridge.com/v1/posts"
        );
    }

    #[test]
    fn test_filter_values_become_repeated_params() {
        let mut query = page_query(0, 50);
        let platforms = vec![Platform::Twitter, Platform::Instagram];
        push_filter(&mut query, "platform", Some(&platforms), |v| {
            v.as_str().to_string()
        });
        assert_eq!(
            query,
            vec![
                ("offset".to_string(), "0".to_string()),
                ("limit".to_string(), "50".to_string()),
                ("platform".to_string(), "twitter".to_string()),
                ("platform".to_string(), "instagram".to_string()),
            ]
        );
    }
}
