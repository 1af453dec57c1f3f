/// Comment rules. Creation runs in one transaction with the notification
/// to the post's author, so neither lands without the other.
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::models::{Comment, NotificationTarget, NotificationVerb};
use crate::error::{AppError, Result};
use crate::metrics;
use crate::middleware::ensure_comment_author;
use crate::repository::posts::post_author_in_tx;
use crate::repository::CommentRepository;
use crate::services::notifications::NotificationService;

#[derive(Clone)]
pub struct CommentService {
    pool: PgPool,
    comments: CommentRepository,
    notifications: NotificationService,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            comments: CommentRepository::new(pool.clone()),
            notifications: NotificationService::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(&self, author_id: Uuid, post_id: Uuid, content: &str) -> Result<Comment> {
        let mut tx = self.pool.begin().await?;

        let post_author = post_author_in_tx(&mut tx, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".into()))?;

        let comment = self
            .comments
            .insert_in_tx(&mut tx, post_id, author_id, content)
            .await?;

        self.notifications
            .notify_in_tx(
                &mut tx,
                post_author,
                author_id,
                NotificationVerb::Commented,
                NotificationTarget::Comment(comment.id),
            )
            .await?;

        tx.commit().await?;

        tracing::info!(comment_id = %comment.id, post_id = %post_id, "comment created");
        metrics::helpers::record_social_event("comment_created");

        Ok(comment)
    }

    pub async fn update(&self, actor_id: Uuid, comment_id: Uuid, content: &str) -> Result<Comment> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".into()))?;
        ensure_comment_author(actor_id, &comment)?;

        let updated = self
            .comments
            .update(comment_id, content)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".into()))?;
        metrics::helpers::record_social_event("comment_updated");

        Ok(updated)
    }

    pub async fn delete(&self, actor_id: Uuid, comment_id: Uuid) -> Result<()> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".into()))?;
        ensure_comment_author(actor_id, &comment)?;

        self.comments.delete(comment_id).await?;
        tracing::info!(comment_id = %comment_id, "comment deleted");
        metrics::helpers::record_social_event("comment_deleted");

        Ok(())
    }

    pub async fn list(
        &self,
        post: Option<Uuid>,
        author: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Comment>, i64)> {
        let comments = self.comments.list(post, author, limit, offset).await?;
        let total = self.comments.count(post, author).await?;

        Ok((comments, total))
    }
}
