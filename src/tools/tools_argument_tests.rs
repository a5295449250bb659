//! Cross-cutting tests for tool argument parsing and DTO construction

#[cfg(test)]
mod pagination_tests {
    use crate::cli::{MediaListArgs, PostResultsListArgs, PostsListArgs, SocialAccountsListArgs};
    use serde_json::json;

    #[test]
    fn test_negative_offset_rejected_everywhere() {
        let payload = json!({ "offset": -1 });
        assert!(serde_json::from_value::<SocialAccountsListArgs>(payload.clone()).is_err());
        assert!(serde_json::from_value::<PostsListArgs>(payload.clone()).is_err());
        assert!(serde_json::from_value::<PostResultsListArgs>(payload.clone()).is_err());
        assert!(serde_json::from_value::<MediaListArgs>(payload).is_err());
    }

    #[test]
    fn test_fractional_limit_rejected() {
        assert!(serde_json::from_value::<PostsListArgs>(json!({ "limit": 10.5 })).is_err());
    }

    #[test]
    fn test_all_list_args_parse_with_full_filters() {
        let args: MediaListArgs = serde_json::from_value(json!({
            "offset": 10,
            "limit": 200,
            "postId": ["p1", "p2"],
            "type": ["image", "video"]
        }))
        .unwrap();
        assert_eq!(args.offset, Some(10));
        assert_eq!(args.limit, Some(200));
        assert_eq!(args.post_id.as_ref().map(|v| v.len()), Some(2));
        assert_eq!(args.r#type.as_ref().map(|v| v.len()), Some(2));
    }
}

#[cfg(test)]
mod status_and_platform_tests {
    use crate::api::dto::{Platform, PostStatus};
    use crate::cli::PostsListArgs;
    use serde_json::json;

    #[test]
    fn test_all_nine_platforms_accepted() {
        let args: PostsListArgs = serde_json::from_value(json!({
            "platform": [
                "bluesky", "facebook", "instagram", "linkedin", "pinterest",
                "threads", "tiktok", "twitter", "youtube"
            ]
        }))
        .unwrap();
        let platforms = args.platform.unwrap();
        assert_eq!(platforms.len(), 9);
        assert_eq!(platforms[0], Platform::Bluesky);
        assert_eq!(platforms[8], Platform::Youtube);
    }

    #[test]
    fn test_status_enum_membership() {
        let args: PostsListArgs =
            serde_json::from_value(json!({ "status": ["posted", "scheduled", "processing"] }))
                .unwrap();
        assert_eq!(
            args.status.unwrap(),
            vec![PostStatus::Posted, PostStatus::Scheduled, PostStatus::Processing]
        );

        assert!(
            serde_json::from_value::<PostsListArgs>(json!({ "status": ["failed"] })).is_err()
        );
    }
}

#[cfg(test)]
mod create_args_tests {
    use crate::cli::PostsCreateArgs;
    use serde_json::json;

    #[test]
    fn test_full_create_payload_parses() {
        let args: PostsCreateArgs = serde_json::from_value(json!({
            "caption": "Launch day!",
            "scheduledAt": "2026-04-01T09:00:00Z",
            "platformConfigurations": {
                "instagram": { "placement": "reels" },
                "tiktok": { "draft": true, "isAigc": false }
            },
            "accountConfigurations": [{ "accountId": 12, "flags": ["a", "b"] }],
            "media": ["med_1"],
            "mediaUrls": ["https://example.com/fallback.png"],
            "socialAccounts": [1, 2, 3],
            "isDraft": false,
            "processingEnabled": true
        }))
        .unwrap();

        assert!(args.scheduled_at.is_some());
        assert!(args.platform_configurations.is_some());
        assert_eq!(args.account_configurations.as_ref().map(|v| v.len()), Some(1));
        assert_eq!(args.social_accounts, vec![1, 2, 3]);
        assert_eq!(args.is_draft, Some(false));
        assert_eq!(args.processing_enabled, Some(true));
    }

    #[test]
    fn test_malformed_scheduled_at_rejected() {
        let result: Result<PostsCreateArgs, _> = serde_json::from_value(json!({
            "caption": "hi",
            "socialAccounts": [1],
            "scheduledAt": "next tuesday"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_platform_override_network_rejected() {
        let result: Result<PostsCreateArgs, _> = serde_json::from_value(json!({
            "caption": "hi",
            "socialAccounts": [1],
            "platformConfigurations": { "tiktok": { "unknownField": 1 } }
        }));
        assert!(result.is_err());
    }
}
