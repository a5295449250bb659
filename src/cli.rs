//! CLI mode implementation
//!
//! Provides the command-line interface for the postbridge tools. The
//! argument structs double as the MCP tool schemas: clap parses them on the
//! command line, serde parses them from tool-call JSON, and schemars renders
//! them for `tools/list`. Doc comments become both `--help` text and schema
//! descriptions.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::dto::{MediaType, MimeType, OpaqueConfig, Platform, PostStatus, ScheduledAtPatch};
use crate::platforms::PlatformConfigurations;

/// Postbridge CLI
#[derive(Parser)]
#[command(name = "postbridge")]
#[command(about = "Post Bridge cross-posting utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect connected social accounts
    #[command(subcommand)]
    SocialAccounts(SocialAccountsCommands),
    /// Create, update, delete and inspect posts
    #[command(subcommand)]
    Posts(PostsCommands),
    /// Inspect per-platform publishing outcomes
    #[command(subcommand)]
    PostResults(PostResultsCommands),
    /// Manage and upload media
    #[command(subcommand)]
    Media(MediaCommands),
}

#[derive(Subcommand)]
pub enum SocialAccountsCommands {
    /// List social accounts with optional filters
    List(SocialAccountsListArgs),
    /// Get a single social account by its numeric ID
    Get(SocialAccountsGetArgs),
}

#[derive(Subcommand)]
pub enum PostsCommands {
    /// List posts with optional platform and status filters
    List(PostsListArgs),
    /// Get a single post by ID
    Get(PostsGetArgs),
    /// Create a new post
    Create(PostsCreateArgs),
    /// Update an existing post
    Update(PostsUpdateArgs),
    /// Delete a post by ID
    Delete(PostsDeleteArgs),
}

#[derive(Subcommand)]
pub enum PostResultsCommands {
    /// List post results with optional filters
    List(PostResultsListArgs),
    /// Get a post result by ID
    Get(PostResultsGetArgs),
}

#[derive(Subcommand)]
pub enum MediaCommands {
    /// List media with optional filters
    List(MediaListArgs),
    /// Get media by ID
    Get(MediaGetArgs),
    /// Delete media by ID
    Delete(MediaDeleteArgs),
    /// Create a signed upload URL
    CreateUploadUrl(MediaCreateUploadUrlArgs),
    /// Upload a local media file and print the media ID
    Upload(MediaUploadArgs),
}

/// socialAccounts_list tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccountsListArgs {
    /// Number of items to skip
    #[arg(long)]
    pub offset: Option<u64>,

    /// Number of items to return (max 200)
    #[arg(long)]
    pub limit: Option<u64>,

    /// Filter by platform(s). Multiple values imply OR logic.
    #[arg(long)]
    pub platform: Option<Vec<String>>,

    /// Filter by username(s). Multiple values imply OR logic.
    #[arg(long)]
    pub username: Option<Vec<String>>,
}

/// socialAccounts_get tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccountsGetArgs {
    /// Social Account ID
    pub id: u64,
}

/// posts_list tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostsListArgs {
    /// Number of items to skip
    #[arg(long)]
    pub offset: Option<u64>,

    /// Number of items to return (max 200)
    #[arg(long)]
    pub limit: Option<u64>,

    /// Filter by platforms. Multiple values imply OR logic.
    #[arg(long)]
    pub platform: Option<Vec<Platform>>,

    /// Filter by post status. Multiple values imply OR logic.
    #[arg(long)]
    pub status: Option<Vec<PostStatus>>,
}

/// posts_get tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostsGetArgs {
    /// Post ID
    pub id: String,
}

/// posts_create tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostsCreateArgs {
    /// Caption text for the post
    #[arg(long)]
    pub caption: String,

    /// RFC 3339 timestamp. Omit to post instantly.
    #[arg(long)]
    pub scheduled_at: Option<DateTime<Utc>>,

    /// Platform-specific configurations overriding post-level fields per
    /// network, as a JSON object. Only provided keys apply. Example:
    /// {"instagram": {"placement": "reels"}, "tiktok": {"draft": true}}
    #[arg(long)]
    pub platform_configurations: Option<PlatformConfigurations>,

    /// Account-specific configurations, each a JSON value forwarded verbatim
    #[arg(long)]
    pub account_configurations: Option<Vec<OpaqueConfig>>,

    /// Media IDs (use media_upload to upload local files first)
    #[arg(long)]
    pub media: Option<Vec<String>>,

    /// Publicly accessible media URLs; ignored if media IDs are provided
    #[arg(long)]
    pub media_urls: Option<Vec<String>>,

    /// Social account IDs to publish to (at least one)
    #[arg(long, required = true)]
    pub social_accounts: Vec<u64>,

    /// If true, creates the post as a draft
    #[arg(long)]
    pub is_draft: Option<bool>,

    /// If true, enable video processing for compatibility; if false, skip it
    #[arg(long)]
    pub processing_enabled: Option<bool>,
}

/// posts_update tool arguments. Every optional field means "leave
/// unchanged" when omitted; scheduledAt additionally distinguishes an
/// explicit null ("post now") from omission.
#[derive(Parser, JsonSchema, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostsUpdateArgs {
    /// Post ID
    pub id: String,

    /// New caption text. Omit to leave unchanged.
    #[arg(long)]
    pub caption: Option<String>,

    /// RFC 3339 timestamp to reschedule, null to post instantly, omit to
    /// leave the existing schedule untouched. When updating a scheduled post
    /// you want to keep scheduled, pass the existing time.
    #[arg(long, default_value = "unchanged")]
    #[serde(default, deserialize_with = "ScheduledAtPatch::deserialize_field")]
    pub scheduled_at: ScheduledAtPatch,

    /// Platform-specific configurations as a JSON object. Omit to leave unchanged.
    #[arg(long)]
    pub platform_configurations: Option<PlatformConfigurations>,

    /// Account-specific configurations. Omit to leave unchanged.
    #[arg(long)]
    pub account_configurations: Option<Vec<OpaqueConfig>>,

    /// Media IDs associated with the post. Omit to leave unchanged.
    #[arg(long)]
    pub media: Option<Vec<String>>,

    /// Publicly accessible media URLs. Ignored if media IDs are provided.
    /// Omit to leave unchanged.
    #[arg(long)]
    pub media_urls: Option<Vec<String>>,

    /// Social account IDs to publish to. Omit to leave unchanged.
    #[arg(long)]
    pub social_accounts: Option<Vec<u64>>,

    /// If true, keeps the post as a draft. Omit to leave unchanged.
    #[arg(long)]
    pub is_draft: Option<bool>,

    /// If true, enable video processing. Omit to leave unchanged.
    #[arg(long)]
    pub processing_enabled: Option<bool>,
}

/// posts_delete tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostsDeleteArgs {
    /// Post ID
    pub id: String,
}

/// postResults_list tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostResultsListArgs {
    /// Number of items to skip
    #[arg(long)]
    pub offset: Option<u64>,

    /// Number of items to return (max 200)
    #[arg(long)]
    pub limit: Option<u64>,

    /// Filter by post IDs
    #[arg(long)]
    pub post_id: Option<Vec<String>>,

    /// Filter by platforms
    #[arg(long)]
    pub platform: Option<Vec<String>>,
}

/// postResults_get tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostResultsGetArgs {
    /// Post Result ID
    pub id: String,
}

/// media_list tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MediaListArgs {
    /// Number of items to skip
    #[arg(long)]
    pub offset: Option<u64>,

    /// Number of items to return (max 200)
    #[arg(long)]
    pub limit: Option<u64>,

    /// Filter by post IDs
    #[arg(long)]
    pub post_id: Option<Vec<String>>,

    /// Filter by media types (image, video)
    #[arg(long)]
    pub r#type: Option<Vec<MediaType>>,
}

/// media_get tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MediaGetArgs {
    /// Media ID
    pub id: String,
}

/// media_delete tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MediaDeleteArgs {
    /// Media ID
    pub id: String,
}

/// media_createUploadUrl tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MediaCreateUploadUrlArgs {
    /// Original file name (used for extension)
    #[arg(long)]
    pub name: String,

    /// MIME type of the media file (image/png, image/jpeg, video/mp4,
    /// video/quicktime)
    #[arg(long)]
    pub mime_type: MimeType,

    /// Size of the media file in bytes
    #[arg(long)]
    pub size_bytes: u64,
}

/// media_upload tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MediaUploadArgs {
    /// Absolute or relative path to the media file on the local filesystem
    pub file_path: String,
}
