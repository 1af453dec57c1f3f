use crate::domain::models::FollowListEntry;
use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for follow-graph edges
#[derive(Clone)]
pub struct FollowRepository {
    pool: PgPool,
}

impl FollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Idempotent edge insert; returns true when a new edge was created.
    pub async fn insert(&self, follower_id: Uuid, followee_id: Uuid) -> Result<bool> {
        let inserted: Option<Uuid> = sqlx::query_scalar(
            r#"
            INSERT INTO follows (follower_id, followee_id, created_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (follower_id, followee_id) DO NOTHING
            RETURNING follower_id
            "#,
        )
        .bind(follower_id)
        .bind(followee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(inserted.is_some())
    }

    /// Idempotent edge delete; returns true when an edge was removed.
    pub async fn delete(&self, follower_id: Uuid, followee_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM follows
            WHERE follower_id = $1 AND followee_id = $2
            "#,
        )
        .bind(follower_id)
        .bind(followee_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Users who follow `user_id`, newest edge first
    pub async fn followers(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FollowListEntry>> {
        let rows = sqlx::query_as::<_, FollowListEntry>(
            r#"
            SELECT u.id, u.username, u.display_name, u.avatar_url, f.created_at AS followed_at
            FROM follows f
            JOIN users u ON u.id = f.follower_id
            WHERE f.followee_id = $1
            ORDER BY f.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Users whom `user_id` follows, newest edge first
    pub async fn following(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FollowListEntry>> {
        let rows = sqlx::query_as::<_, FollowListEntry>(
            r#"
            SELECT u.id, u.username, u.display_name, u.avatar_url, f.created_at AS followed_at
            FROM follows f
            JOIN users u ON u.id = f.followee_id
            WHERE f.follower_id = $1
            ORDER BY f.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// (followers, following) counts for a profile
    pub async fn counts(&self, user_id: Uuid) -> Result<(i64, i64)> {
        let counts = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM follows WHERE followee_id = $1),
                (SELECT COUNT(*) FROM follows WHERE follower_id = $1)
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(counts)
    }
}
