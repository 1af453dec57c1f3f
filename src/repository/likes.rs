use crate::domain::models::{Like, PostLikerEntry};
use crate::error::Result;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Repository for likes. Uniqueness rides on the (user_id, post_id)
/// constraint; there is deliberately no check-then-insert here.
#[derive(Clone)]
pub struct LikeRepository {
    pool: PgPool,
}

impl LikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Conflict-free insert within the caller's transaction. Returns None
    /// when the (user, post) pair already existed.
    pub async fn insert_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<Option<Like>> {
        let like = sqlx::query_as::<_, Like>(
            r#"
            INSERT INTO likes (id, user_id, post_id, created_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user_id, post_id) DO NOTHING
            RETURNING id, user_id, post_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(like)
    }

    pub async fn find(&self, user_id: Uuid, post_id: Uuid) -> Result<Option<Like>> {
        let like = sqlx::query_as::<_, Like>(
            r#"
            SELECT id, user_id, post_id, created_at
            FROM likes
            WHERE user_id = $1 AND post_id = $2
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(like)
    }

    /// Returns true when a like row was removed.
    pub async fn delete(&self, user_id: Uuid, post_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM likes
            WHERE user_id = $1 AND post_id = $2
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_for_post(&self, post_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM likes
            WHERE post_id = $1
            "#,
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Users who liked a post, newest like first
    pub async fn likers(
        &self,
        post_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostLikerEntry>> {
        let rows = sqlx::query_as::<_, PostLikerEntry>(
            r#"
            SELECT u.id, u.username, u.display_name, u.avatar_url, l.created_at AS liked_at
            FROM likes l
            JOIN users u ON u.id = l.user_id
            WHERE l.post_id = $1
            ORDER BY l.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(post_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
