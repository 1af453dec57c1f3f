/// Follow-graph rules: no self-edges, idempotent follow/unfollow, and
/// never a notification in either direction.
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::models::FollowListEntry;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::repository::{FollowRepository, UserRepository};

#[derive(Clone)]
pub struct FollowService {
    follows: FollowRepository,
    users: UserRepository,
}

impl FollowService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            follows: FollowRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Idempotent follow; returns true when a new edge was created.
    pub async fn follow(&self, follower_id: Uuid, followee_id: Uuid) -> Result<bool> {
        if follower_id == followee_id {
            return Err(AppError::BadRequest("You cannot follow yourself".into()));
        }

        if !self.users.exists(followee_id).await? {
            return Err(AppError::NotFound("User not found".into()));
        }

        let created = self.follows.insert(follower_id, followee_id).await?;
        if created {
            tracing::info!(follower_id = %follower_id, followee_id = %followee_id, "follow created");
            metrics::helpers::record_social_event("follow");
        }

        Ok(created)
    }

    /// Idempotent unfollow; a missing edge is still a success.
    pub async fn unfollow(&self, follower_id: Uuid, followee_id: Uuid) -> Result<bool> {
        if follower_id == followee_id {
            return Err(AppError::BadRequest("You cannot unfollow yourself".into()));
        }

        let removed = self.follows.delete(follower_id, followee_id).await?;
        if removed {
            tracing::info!(follower_id = %follower_id, followee_id = %followee_id, "follow removed");
            metrics::helpers::record_social_event("unfollow");
        }

        Ok(removed)
    }

    pub async fn followers(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FollowListEntry>> {
        self.follows.followers(user_id, limit, offset).await
    }

    pub async fn following(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FollowListEntry>> {
        self.follows.following(user_id, limit, offset).await
    }

    /// (followers, following) counts for the profile view
    pub async fn counts(&self, user_id: Uuid) -> Result<(i64, i64)> {
        self.follows.counts(user_id).await
    }
}
