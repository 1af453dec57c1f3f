/// Authorization checks for the social API.
///
/// Ownership is the only permission model here: everyone reads, only the
/// author mutates. The checks are plain functions called by the services
/// after loading the row, so a missing row stays a 404 and a foreign row
/// a 403.
use uuid::Uuid;

use crate::domain::models::{Comment, Post};
use crate::error::AppError;

/// Result type for permission checks
pub type PermissionResult = Result<(), AppError>;

/// Only the author may modify or delete a post
pub fn ensure_post_author(actor_id: Uuid, post: &Post) -> PermissionResult {
    if post.author_id == actor_id {
        Ok(())
    } else {
        Err(AppError::Authorization(
            "You don't have permission to modify this post".into(),
        ))
    }
}

/// Only the author may modify or delete a comment
pub fn ensure_comment_author(actor_id: Uuid, comment: &Comment) -> PermissionResult {
    if comment.author_id == actor_id {
        Ok(())
    } else {
        Err(AppError::Authorization(
            "You don't have permission to modify this comment".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post_by(author_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            author_id,
            title: "t".into(),
            content: "c".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_author_passes() {
        let author = Uuid::new_v4();
        assert!(ensure_post_author(author, &post_by(author)).is_ok());
    }

    #[test]
    fn test_non_author_denied() {
        let err = ensure_post_author(Uuid::new_v4(), &post_by(Uuid::new_v4())).unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }
}
