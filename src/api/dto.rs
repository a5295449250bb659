//! Request and response shapes for the Post Bridge API
//!
//! All entities are transient wire shapes owned by the remote platform;
//! nothing here is persisted locally.

use chrono::{DateTime, Utc};
use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::platforms::PlatformConfigurations;

/// Social networks Post Bridge can publish to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Bluesky,
    Facebook,
    Instagram,
    Linkedin,
    Pinterest,
    Threads,
    Tiktok,
    Twitter,
    Youtube,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Bluesky => "bluesky",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Pinterest => "pinterest",
            Platform::Threads => "threads",
            Platform::Tiktok => "tiktok",
            Platform::Twitter => "twitter",
            Platform::Youtube => "youtube",
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bluesky" => Ok(Platform::Bluesky),
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::Linkedin),
            "pinterest" => Ok(Platform::Pinterest),
            "threads" => Ok(Platform::Threads),
            "tiktok" => Ok(Platform::Tiktok),
            "twitter" => Ok(Platform::Twitter),
            "youtube" => Ok(Platform::Youtube),
            other => Err(format!("unknown platform: {}", other)),
        }
    }
}

/// Post lifecycle states usable as a list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Posted,
    Scheduled,
    Processing,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Posted => "posted",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Processing => "processing",
        }
    }
}

impl FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posted" => Ok(PostStatus::Posted),
            "scheduled" => Ok(PostStatus::Scheduled),
            "processing" => Ok(PostStatus::Processing),
            other => Err(format!("unknown post status: {}", other)),
        }
    }
}

/// Media kinds usable as a list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            other => Err(format!("unknown media type: {}", other)),
        }
    }
}

/// MIME types accepted for media uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum MimeType {
    #[serde(rename = "image/png")]
    ImagePng,
    #[serde(rename = "image/jpeg")]
    ImageJpeg,
    #[serde(rename = "video/mp4")]
    VideoMp4,
    #[serde(rename = "video/quicktime")]
    VideoQuicktime,
}

impl MimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::ImagePng => "image/png",
            MimeType::ImageJpeg => "image/jpeg",
            MimeType::VideoMp4 => "video/mp4",
            MimeType::VideoQuicktime => "video/quicktime",
        }
    }

    /// Map a lowercased file extension (without the dot) to a MIME type.
    /// Derivation is purely by extension; there is no content sniffing.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "png" => Some(MimeType::ImagePng),
            "jpg" | "jpeg" => Some(MimeType::ImageJpeg),
            "mp4" => Some(MimeType::VideoMp4),
            "mov" => Some(MimeType::VideoQuicktime),
            _ => None,
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MimeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image/png" => Ok(MimeType::ImagePng),
            "image/jpeg" => Ok(MimeType::ImageJpeg),
            "video/mp4" => Ok(MimeType::VideoMp4),
            "video/quicktime" => Ok(MimeType::VideoQuicktime),
            other => Err(format!(
                "unsupported MIME type: {} (expected image/png, image/jpeg, video/mp4 or video/quicktime)",
                other
            )),
        }
    }
}

/// Opaque JSON value forwarded verbatim to the remote API.
///
/// Account configurations have no documented shape; this wrapper keeps them
/// explicitly open without loosening the rest of the type surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct OpaqueConfig(pub serde_json::Value);

impl FromStr for OpaqueConfig {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OpaqueConfig(serde_json::from_str(s)?))
    }
}

/// Three-state scheduling patch for post updates.
///
/// Absent means "leave the existing schedule alone", explicit null means
/// "clear the schedule and post now", a timestamp reschedules. The states
/// must stay distinguishable all the way into the wire request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScheduledAtPatch {
    #[default]
    Unchanged,
    Clear,
    Set(DateTime<Utc>),
}

impl ScheduledAtPatch {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, ScheduledAtPatch::Unchanged)
    }

    /// Field deserializer: only invoked when the key is present, so absent
    /// falls through to the `Unchanged` default.
    pub fn deserialize_field<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<DateTime<Utc>>::deserialize(deserializer)?;
        Ok(match value {
            Some(at) => ScheduledAtPatch::Set(at),
            None => ScheduledAtPatch::Clear,
        })
    }

    /// Field serializer, paired with `skip_serializing_if = "is_unchanged"`
    /// so `Unchanged` never reaches the wire.
    pub fn serialize_field<S>(patch: &ScheduledAtPatch, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match patch {
            ScheduledAtPatch::Set(at) => at.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

impl JsonSchema for ScheduledAtPatch {
    fn schema_name() -> String {
        "ScheduledAtPatch".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        let mut schema = SchemaObject {
            instance_type: Some(vec![InstanceType::String, InstanceType::Null].into()),
            format: Some("date-time".to_string()),
            ..Default::default()
        };
        schema.metadata().description = Some(
            "RFC 3339 timestamp to schedule, null to post instantly. Omit to leave the \
             existing schedule unchanged."
                .to_string(),
        );
        Schema::Object(schema)
    }
}

impl FromStr for ScheduledAtPatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unchanged" => Ok(ScheduledAtPatch::Unchanged),
            "null" | "none" => Ok(ScheduledAtPatch::Clear),
            other => other
                .parse::<DateTime<Utc>>()
                .map(ScheduledAtPatch::Set)
                .map_err(|e| format!("expected RFC 3339 timestamp, 'null' or 'unchanged': {}", e)),
        }
    }
}

/// Creation request for `POST /v1/posts`.
///
/// Optional fields the caller did not supply are omitted from the JSON
/// entirely, never sent as null.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    pub caption: String,
    pub social_accounts: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_configurations: Option<PlatformConfigurations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_configurations: Option<Vec<OpaqueConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_enabled: Option<bool>,
}

/// Update request for `PATCH /v1/posts/{id}`: omit = leave unchanged,
/// except `scheduledAt` which carries the three-state patch.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(
        skip_serializing_if = "ScheduledAtPatch::is_unchanged",
        serialize_with = "ScheduledAtPatch::serialize_field"
    )]
    pub scheduled_at: ScheduledAtPatch,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_configurations: Option<PlatformConfigurations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_configurations: Option<Vec<OpaqueConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_accounts: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_enabled: Option<bool>,
}

/// Request body for `POST /v1/media/create-upload-url`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUploadUrlDto {
    pub name: String,
    pub mime_type: MimeType,
    pub size_bytes: u64,
}

/// The fields the upload helper needs from the create-upload-url response;
/// anything else the remote returns is ignored here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
    pub media_id: String,
}
