use chrono::Utc;
/// Wire-shape tests for the social API payloads
///
/// This test module covers:
/// - Notification serialization (flat verb, tagged target)
/// - Request payload deserialization and validation limits
/// - Response shapes as clients consume them
use social_api::domain::models::*;
use social_api::domain::requests::*;
use social_api::handlers::posts::PostResponse;
use uuid::Uuid;
use validator::Validate;

#[test]
fn test_notification_verb_serialization() {
    let verbs = vec![NotificationVerb::Commented, NotificationVerb::Liked];

    for verb in verbs {
        let json = serde_json::to_string(&verb).unwrap();
        let deserialized: NotificationVerb = serde_json::from_str(&json).unwrap();
        assert_eq!(verb, deserialized);
        assert_eq!(json, format!("\"{}\"", verb.as_str()));
    }
}

#[test]
fn test_notification_target_serialization() {
    let targets = vec![
        NotificationTarget::Post(Uuid::new_v4()),
        NotificationTarget::Comment(Uuid::new_v4()),
    ];

    for target in targets {
        let json = serde_json::to_string(&target).unwrap();
        let deserialized: NotificationTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(target, deserialized);
    }
}

#[test]
fn test_notification_wire_shape() {
    let target_id = Uuid::new_v4();
    let notification = Notification {
        id: Uuid::new_v4(),
        recipient_id: Uuid::new_v4(),
        actor_id: Uuid::new_v4(),
        verb: NotificationVerb::Liked,
        target: NotificationTarget::Post(target_id),
        is_read: false,
        created_at: Utc::now(),
    };

    let value = serde_json::to_value(&notification).unwrap();
    assert_eq!(value["verb"], "liked");
    assert_eq!(value["target"]["kind"], "post");
    assert_eq!(value["target"]["id"], target_id.to_string());
    assert_eq!(value["is_read"], false);
}

#[test]
fn test_create_post_request_limits() {
    let at_limit = CreatePostRequest {
        title: "t".repeat(200),
        content: "c".repeat(10_000),
    };
    assert!(at_limit.validate().is_ok());

    let over_title = CreatePostRequest {
        title: "t".repeat(201),
        content: "body".into(),
    };
    assert!(over_title.validate().is_err());

    let over_content = CreatePostRequest {
        title: "title".into(),
        content: "c".repeat(10_001),
    };
    assert!(over_content.validate().is_err());
}

#[test]
fn test_comment_request_limits() {
    let at_limit = CreateCommentRequest {
        content: "c".repeat(5_000),
    };
    assert!(at_limit.validate().is_ok());

    let over = CreateCommentRequest {
        content: "c".repeat(5_001),
    };
    assert!(over.validate().is_err());

    let empty = CreateCommentRequest {
        content: String::new(),
    };
    assert!(empty.validate().is_err());
}

#[test]
fn test_update_post_request_is_partial() {
    let title_only: UpdatePostRequest = serde_json::from_str(r#"{"title": "new"}"#).unwrap();
    assert_eq!(title_only.title.as_deref(), Some("new"));
    assert!(title_only.content.is_none());
    assert!(!title_only.is_empty());
    assert!(title_only.validate().is_ok());

    let empty: UpdatePostRequest = serde_json::from_str("{}").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_ordering_values_parse() {
    for raw in PostOrdering::ALLOWED {
        assert!(PostOrdering::parse(raw).is_some(), "{} should parse", raw);
    }
    assert!(PostOrdering::parse("id").is_none());
    assert!(PostOrdering::parse("-author_id").is_none());
}

#[test]
fn test_post_response_nests_author() {
    let row = PostWithAuthor {
        id: Uuid::new_v4(),
        author_id: Uuid::new_v4(),
        author_username: "alice".into(),
        author_display_name: Some("Alice".into()),
        author_avatar_url: None,
        title: "Hello".into(),
        content: "First post".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    let author_id = row.author_id;

    let value = serde_json::to_value(PostResponse::from(row)).unwrap();
    assert_eq!(value["author"]["id"], author_id.to_string());
    assert_eq!(value["author"]["username"], "alice");
    // The flat repository columns never leak into the response
    assert!(value.get("author_username").is_none());
}
