use crate::domain::models::Comment;
use crate::error::Result;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Repository for comments
#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert within the caller's transaction so the comment and its
    /// notification commit together.
    pub async fn insert_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        post_id: Uuid,
        author_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, post_id, author_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, post_id, author_id, content, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(post_id)
        .bind(author_id)
        .bind(content)
        .fetch_one(&mut **tx)
        .await?;

        Ok(comment)
    }

    pub async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, author_id, content, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    pub async fn update(&self, comment_id: Uuid, content: &str) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET content = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, post_id, author_id, content, created_at, updated_at
            "#,
        )
        .bind(comment_id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    pub async fn delete(&self, comment_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Filtered listing, newest first with id tiebreak
    pub async fn list(
        &self,
        post: Option<Uuid>,
        author: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, author_id, content, created_at, updated_at
            FROM comments
            WHERE ($1::uuid IS NULL OR post_id = $1)
              AND ($2::uuid IS NULL OR author_id = $2)
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(post)
        .bind(author)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    pub async fn count(&self, post: Option<Uuid>, author: Option<Uuid>) -> Result<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM comments
            WHERE ($1::uuid IS NULL OR post_id = $1)
              AND ($2::uuid IS NULL OR author_id = $2)
            "#,
        )
        .bind(post)
        .bind(author)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
