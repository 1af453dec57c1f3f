/// Like rules. First-time likes and their notification are one
/// transaction; the (user, post) unique constraint is the only
/// double-like arbiter.
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::models::{Like, NotificationTarget, NotificationVerb, PostLikerEntry};
use crate::error::{AppError, Result};
use crate::metrics;
use crate::repository::posts::post_author_in_tx;
use crate::repository::{LikeRepository, PostRepository};
use crate::services::notifications::NotificationService;

/// Distinguishes a fresh like (201) from a repeat (200).
#[derive(Debug, Clone)]
pub enum LikeOutcome {
    Created(Like),
    AlreadyLiked(Like),
}

#[derive(Clone)]
pub struct LikeService {
    pool: PgPool,
    likes: LikeRepository,
    posts: PostRepository,
    notifications: NotificationService,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            likes: LikeRepository::new(pool.clone()),
            posts: PostRepository::new(pool.clone()),
            notifications: NotificationService::new(pool.clone()),
            pool,
        }
    }

    pub async fn like(&self, user_id: Uuid, post_id: Uuid) -> Result<LikeOutcome> {
        let mut tx = self.pool.begin().await?;

        let post_author = post_author_in_tx(&mut tx, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".into()))?;

        match self.likes.insert_in_tx(&mut tx, user_id, post_id).await? {
            Some(like) => {
                self.notifications
                    .notify_in_tx(
                        &mut tx,
                        post_author,
                        user_id,
                        NotificationVerb::Liked,
                        NotificationTarget::Post(post_id),
                    )
                    .await?;
                tx.commit().await?;

                tracing::info!(user_id = %user_id, post_id = %post_id, "like created");
                metrics::helpers::record_social_event("like");

                Ok(LikeOutcome::Created(like))
            }
            None => {
                // Nothing was written; repeat likes return the existing row.
                tx.rollback().await?;

                let like = self.likes.find(user_id, post_id).await?.ok_or_else(|| {
                    AppError::Internal("like disappeared during insert".into())
                })?;

                Ok(LikeOutcome::AlreadyLiked(like))
            }
        }
    }

    /// Removing a like that was never there is a client error, not a no-op.
    pub async fn unlike(&self, user_id: Uuid, post_id: Uuid) -> Result<()> {
        if !self.posts.exists(post_id).await? {
            return Err(AppError::NotFound("Post not found".into()));
        }

        let removed = self.likes.delete(user_id, post_id).await?;
        if !removed {
            return Err(AppError::BadRequest("You have not liked this post".into()));
        }

        tracing::info!(user_id = %user_id, post_id = %post_id, "like removed");
        metrics::helpers::record_social_event("unlike");

        Ok(())
    }

    pub async fn likers(
        &self,
        post_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<PostLikerEntry>, i64)> {
        if !self.posts.exists(post_id).await? {
            return Err(AppError::NotFound("Post not found".into()));
        }

        let likers = self.likes.likers(post_id, limit, offset).await?;
        let total = self.likes.count_for_post(post_id).await?;

        Ok((likers, total))
    }
}
