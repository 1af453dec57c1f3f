use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

/// User read-model. Rows are provisioned by the identity platform; this
/// service never inserts or updates them.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Row shape for follower/following listings
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FollowListEntry {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub followed_at: DateTime<Utc>,
}

/// Post entity - authored content, title plus body
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post joined with its author's public fields, as listings return it
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostWithAuthor {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub author_display_name: Option<String>,
    pub author_avatar_url: Option<String>,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment entity - represents a comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Like entity - represents a user liking a post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Row shape for the likers-of-a-post listing
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostLikerEntry {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub liked_at: DateTime<Utc>,
}

/// What a notification is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVerb {
    /// Someone commented on the recipient's post
    Commented,
    /// Someone liked the recipient's post
    Liked,
}

impl NotificationVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationVerb::Commented => "commented",
            NotificationVerb::Liked => "liked",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "commented" => Some(NotificationVerb::Commented),
            "liked" => Some(NotificationVerb::Liked),
            _ => None,
        }
    }
}

/// The object a notification points at. Stored as (target_kind, target_id)
/// columns; the enum keeps the pair well-typed on the Rust side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum NotificationTarget {
    Post(Uuid),
    Comment(Uuid),
}

impl NotificationTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            NotificationTarget::Post(_) => "post",
            NotificationTarget::Comment(_) => "comment",
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            NotificationTarget::Post(id) | NotificationTarget::Comment(id) => *id,
        }
    }

    pub fn from_parts(kind: &str, id: Uuid) -> Option<Self> {
        match kind {
            "post" => Some(NotificationTarget::Post(id)),
            "comment" => Some(NotificationTarget::Comment(id)),
            _ => None,
        }
    }
}

/// Notification entity - recorded synchronously when someone comments on
/// or likes another user's post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub actor_id: Uuid,
    pub verb: NotificationVerb,
    pub target: NotificationTarget,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

// Manual mapping: the tagged target spans two columns.
impl sqlx::FromRow<'_, PgRow> for Notification {
    fn from_row(row: &PgRow) -> std::result::Result<Self, sqlx::Error> {
        let verb_raw: String = row.try_get("verb")?;
        let verb = NotificationVerb::parse(&verb_raw).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "verb".into(),
            source: format!("unknown notification verb '{}'", verb_raw).into(),
        })?;

        let kind_raw: String = row.try_get("target_kind")?;
        let target_id: Uuid = row.try_get("target_id")?;
        let target = NotificationTarget::from_parts(&kind_raw, target_id).ok_or_else(|| {
            sqlx::Error::ColumnDecode {
                index: "target_kind".into(),
                source: format!("unknown notification target kind '{}'", kind_raw).into(),
            }
        })?;

        Ok(Notification {
            id: row.try_get("id")?,
            recipient_id: row.try_get("recipient_id")?,
            actor_id: row.try_get("actor_id")?,
            verb,
            target,
            is_read: row.try_get("is_read")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_round_trip() {
        for verb in [NotificationVerb::Commented, NotificationVerb::Liked] {
            assert_eq!(NotificationVerb::parse(verb.as_str()), Some(verb));
        }
        assert_eq!(NotificationVerb::parse("followed"), None);
    }

    #[test]
    fn test_target_serializes_tagged() {
        let id = Uuid::new_v4();
        let value = serde_json::to_value(NotificationTarget::Post(id)).unwrap();
        assert_eq!(value["kind"], "post");
        assert_eq!(value["id"], id.to_string());

        let back: NotificationTarget = serde_json::from_value(value).unwrap();
        assert_eq!(back, NotificationTarget::Post(id));
    }

    #[test]
    fn test_target_parts() {
        let id = Uuid::new_v4();
        let target = NotificationTarget::from_parts("comment", id).unwrap();
        assert_eq!(target.kind(), "comment");
        assert_eq!(target.id(), id);
        assert!(NotificationTarget::from_parts("story", id).is_none());
    }
}
