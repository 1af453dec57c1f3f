/// Request payloads and query parameters for the HTTP surface.
///
/// Field limits follow the platform conventions: titles up to 200 chars,
/// post bodies up to 10k, comments up to 5k. Author ids never appear in
/// payloads; they always come from the authenticated token.
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(
        length(min = 1, max = 200, message = "title must be 1-200 characters"),
        custom(function = "not_blank", message = "title must not be blank")
    )]
    pub title: String,
    #[validate(
        length(min = 1, max = 10000, message = "content must be 1-10000 characters"),
        custom(function = "not_blank", message = "content must not be blank")
    )]
    pub content: String,
}

/// Partial update shared by PUT and PATCH; absent fields keep their value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(
        length(min = 1, max = 200, message = "title must be 1-200 characters"),
        custom(function = "not_blank", message = "title must not be blank")
    )]
    pub title: Option<String>,
    #[validate(
        length(min = 1, max = 10000, message = "content must be 1-10000 characters"),
        custom(function = "not_blank", message = "content must not be blank")
    )]
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(
        length(min = 1, max = 5000, message = "content must be 1-5000 characters"),
        custom(function = "not_blank", message = "content must not be blank")
    )]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(
        length(min = 1, max = 5000, message = "content must be 1-5000 characters"),
        custom(function = "not_blank", message = "content must not be blank")
    )]
    pub content: String,
}

fn default_limit() -> i64 {
    20
}

/// Sort order for post listings. Only timestamp columns are exposed; the
/// raw value never reaches the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostOrdering {
    #[default]
    CreatedAtDesc,
    CreatedAtAsc,
    UpdatedAtDesc,
    UpdatedAtAsc,
}

impl PostOrdering {
    pub const ALLOWED: [&'static str; 4] =
        ["created_at", "-created_at", "updated_at", "-updated_at"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "created_at" => Some(PostOrdering::CreatedAtAsc),
            "-created_at" => Some(PostOrdering::CreatedAtDesc),
            "updated_at" => Some(PostOrdering::UpdatedAtAsc),
            "-updated_at" => Some(PostOrdering::UpdatedAtDesc),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PostListQuery {
    /// Exact author filter
    pub author: Option<Uuid>,
    /// Case-insensitive substring over title and content
    pub search: Option<String>,
    /// One of created_at, -created_at, updated_at, -updated_at
    pub ordering: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct CommentListQuery {
    pub post: Option<Uuid>,
    pub author: Option<Uuid>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct NotificationListQuery {
    /// true restricts to unread notifications
    pub unread: Option<bool>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

/// Listings share one pagination contract: limit 1..=100, offset >= 0.
pub fn clamp_page(limit: i64, offset: i64) -> (i64, i64) {
    (limit.clamp(1, 100), offset.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_ordering_whitelist() {
        assert_eq!(
            PostOrdering::parse("-created_at"),
            Some(PostOrdering::CreatedAtDesc)
        );
        assert_eq!(
            PostOrdering::parse("updated_at"),
            Some(PostOrdering::UpdatedAtAsc)
        );
        assert_eq!(PostOrdering::parse("author_id"), None);
        assert_eq!(PostOrdering::parse(""), None);
        assert_eq!(PostOrdering::parse("created_at;DROP TABLE posts"), None);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(20, 0), (20, 0));
        assert_eq!(clamp_page(0, 0), (1, 0));
        assert_eq!(clamp_page(1000, -5), (100, 0));
    }

    #[test]
    fn test_post_payload_limits() {
        let ok = CreatePostRequest {
            title: "hello".into(),
            content: "world".into(),
        };
        assert!(ok.validate().is_ok());

        let empty_title = CreatePostRequest {
            title: String::new(),
            content: "world".into(),
        };
        assert!(empty_title.validate().is_err());

        let blank_title = CreatePostRequest {
            title: "   ".into(),
            content: "world".into(),
        };
        let errors = blank_title.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));

        let oversized = CreatePostRequest {
            title: "t".repeat(201),
            content: "world".into(),
        };
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn test_update_post_empty_detection() {
        let empty = UpdatePostRequest {
            title: None,
            content: None,
        };
        assert!(empty.is_empty());
        assert!(empty.validate().is_ok());

        let partial = UpdatePostRequest {
            title: Some("new title".into()),
            content: None,
        };
        assert!(!partial.is_empty());
        assert!(partial.validate().is_ok());
    }
}
