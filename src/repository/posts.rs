use crate::domain::models::{Post, PostWithAuthor};
use crate::domain::requests::PostOrdering;
use crate::error::Result;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

const POST_AUTHOR_COLUMNS: &str = r#"
    p.id, p.author_id, u.username AS author_username,
    u.display_name AS author_display_name, u.avatar_url AS author_avatar_url,
    p.title, p.content, p.created_at, p.updated_at
"#;

/// Repository for posts
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, author_id: Uuid, title: &str, content: &str) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, author_id, title, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, author_id, title, content, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(author_id)
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, title, content, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn exists(&self, post_id: Uuid) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)
            "#,
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn find_with_author(&self, post_id: Uuid) -> Result<Option<PostWithAuthor>> {
        let sql = format!(
            r#"
            SELECT {POST_AUTHOR_COLUMNS}
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE p.id = $1
            "#
        );
        let post = sqlx::query_as::<_, PostWithAuthor>(&sql)
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(post)
    }

    /// Partial update; absent fields keep their value. Returns None when the
    /// row disappeared between the ownership check and the write.
    pub async fn update(
        &self,
        post_id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, author_id, title, content, created_at, updated_at
            "#,
        )
        .bind(post_id)
        .bind(title)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn delete(&self, post_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Filtered listing. The ORDER BY text comes from the `PostOrdering`
    /// whitelist, never from the raw query string; id breaks timestamp ties
    /// so pages are stable.
    pub async fn list(
        &self,
        author: Option<Uuid>,
        search: Option<&str>,
        ordering: PostOrdering,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostWithAuthor>> {
        let order_clause = match ordering {
            PostOrdering::CreatedAtDesc => "p.created_at DESC, p.id DESC",
            PostOrdering::CreatedAtAsc => "p.created_at ASC, p.id ASC",
            PostOrdering::UpdatedAtDesc => "p.updated_at DESC, p.id DESC",
            PostOrdering::UpdatedAtAsc => "p.updated_at ASC, p.id ASC",
        };

        let sql = format!(
            r#"
            SELECT {POST_AUTHOR_COLUMNS}
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE ($1::uuid IS NULL OR p.author_id = $1)
              AND ($2::text IS NULL OR p.title ILIKE $2 OR p.content ILIKE $2)
            ORDER BY {order_clause}
            LIMIT $3 OFFSET $4
            "#
        );

        let posts = sqlx::query_as::<_, PostWithAuthor>(&sql)
            .bind(author)
            .bind(search.map(|s| format!("%{}%", s)))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }

    pub async fn count(&self, author: Option<Uuid>, search: Option<&str>) -> Result<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM posts p
            WHERE ($1::uuid IS NULL OR p.author_id = $1)
              AND ($2::text IS NULL OR p.title ILIKE $2 OR p.content ILIKE $2)
            "#,
        )
        .bind(author)
        .bind(search.map(|s| format!("%{}%", s)))
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// One feed page: posts authored by users the viewer follows, newest
    /// first with id as the tiebreak.
    pub async fn feed_page(
        &self,
        viewer_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostWithAuthor>> {
        let sql = format!(
            r#"
            SELECT {POST_AUTHOR_COLUMNS}
            FROM posts p
            JOIN follows f ON f.followee_id = p.author_id
            JOIN users u ON u.id = p.author_id
            WHERE f.follower_id = $1
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $2 OFFSET $3
            "#
        );

        let posts = sqlx::query_as::<_, PostWithAuthor>(&sql)
            .bind(viewer_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }

    pub async fn feed_total(&self, viewer_id: Uuid) -> Result<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM posts p
            JOIN follows f ON f.followee_id = p.author_id
            WHERE f.follower_id = $1
            "#,
        )
        .bind(viewer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

/// Author lookup inside an open transaction, for the write paths that
/// compose a content insert with a notification.
pub async fn post_author_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    post_id: Uuid,
) -> Result<Option<Uuid>> {
    let author: Option<Uuid> = sqlx::query_scalar(
        r#"
        SELECT author_id FROM posts WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(author)
}
