//! Per-network override configurations
//!
//! Each network accepts only its own documented fields: deserialization is
//! closed-world (`deny_unknown_fields`), so an unrecognized key rejects the
//! whole override object and names the offending field. Range constraints
//! are carried by the types themselves (`u64` timestamps cannot go
//! negative); the one check serde cannot express lives in `validate()`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Threads post location: short vertical video or the standard feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThreadsLocation {
    Reels,
    Timeline,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlueskyConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FacebookConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
    /// Placement type (e.g. feed, reels); the remote default applies when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InstagramConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
    /// Video cover timestamp in milliseconds, >= 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_cover_timestamp_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LinkedinConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PinterestConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
    /// Board IDs to publish to; the default board applies when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_ids: Option<Vec<String>>,
    /// Destination URL for the Pin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_cover_timestamp_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThreadsConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ThreadsLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TiktokConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_cover_timestamp_ms: Option<u64>,
    /// Save as a TikTok draft instead of publishing immediately
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    /// Mark the video with the "Creator labeled as AI-generated" tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_aigc: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TwitterConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct YoutubeConfiguration {
    /// Overrides the post description for YouTube
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
    /// Overrides the video title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Per-network overrides attached to a post. Only provided keys apply;
/// other networks inherit the post-level fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlatformConfigurations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluesky: Option<BlueskyConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<FacebookConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<InstagramConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<LinkedinConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinterest: Option<PinterestConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<ThreadsConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<TiktokConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<YoutubeConfiguration>,
}

impl PlatformConfigurations {
    /// Semantic checks that the serde types cannot carry
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(pinterest) = &self.pinterest {
            if let Some(link) = &pinterest.link {
                if url::Url::parse(link).is_err() {
                    return Err(AppError::InvalidInput(format!(
                        "platformConfigurations.pinterest.link is not a valid URL: {}",
                        link
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for PlatformConfigurations {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<PlatformConfigurations, _> =
            serde_json::from_value(json!({ "tiktok": { "unknownField": 1 } }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknownField"), "error should name the field: {}", err);
    }

    #[test]
    fn test_unknown_network_rejected() {
        let result: Result<PlatformConfigurations, _> =
            serde_json::from_value(json!({ "myspace": { "caption": "hi" } }));
        assert!(result.is_err());
    }

    #[test]
    fn test_tiktok_documented_fields_accepted() {
        let configs: PlatformConfigurations =
            serde_json::from_value(json!({ "tiktok": { "draft": true, "isAigc": false } }))
                .unwrap();
        let tiktok = configs.tiktok.unwrap();
        assert_eq!(tiktok.draft, Some(true));
        assert_eq!(tiktok.is_aigc, Some(false));
    }

    #[test]
    fn test_negative_cover_timestamp_rejected() {
        let result: Result<PlatformConfigurations, _> = serde_json::from_value(
            json!({ "instagram": { "videoCoverTimestampMs": -5 } }),
        );
        assert!(result.is_err());

        let configs: PlatformConfigurations = serde_json::from_value(
            json!({ "instagram": { "videoCoverTimestampMs": 1500, "placement": "reels" } }),
        )
        .unwrap();
        assert_eq!(configs.instagram.unwrap().video_cover_timestamp_ms, Some(1500));
    }

    #[test]
    fn test_threads_location_enum() {
        let configs: PlatformConfigurations =
            serde_json::from_value(json!({ "threads": { "location": "reels" } })).unwrap();
        assert_eq!(configs.threads.unwrap().location, Some(ThreadsLocation::Reels));

        let result: Result<PlatformConfigurations, _> =
            serde_json::from_value(json!({ "threads": { "location": "stories" } }));
        assert!(result.is_err());
    }

    #[test]
    fn test_pinterest_link_validation() {
        let configs: PlatformConfigurations = serde_json::from_value(
            json!({ "pinterest": { "link": "https://example.com/product" } }),
        )
        .unwrap();
        assert!(configs.validate().is_ok());

        let configs: PlatformConfigurations =
            serde_json::from_value(json!({ "pinterest": { "link": "not a url" } })).unwrap();
        let err = configs.validate().unwrap_err();
        assert!(err.message().contains("pinterest.link"));
    }

    #[test]
    fn test_overrides_serialize_without_absent_fields() {
        let configs: PlatformConfigurations = serde_json::from_value(
            json!({ "pinterest": { "boardIds": ["b1"], "title": "Pin title" } }),
        )
        .unwrap();
        let value = serde_json::to_value(&configs).unwrap();
        assert_eq!(
            value,
            json!({ "pinterest": { "boardIds": ["b1"], "title": "Pin title" } })
        );
    }
}
