/// Post rules: the author comes from the authenticated token at creation
/// and can never change; only the author updates or deletes.
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::models::{Post, PostWithAuthor};
use crate::domain::requests::PostOrdering;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::middleware::ensure_post_author;
use crate::repository::PostRepository;

#[derive(Clone)]
pub struct PostService {
    posts: PostRepository,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            posts: PostRepository::new(pool),
        }
    }

    pub async fn create(&self, author_id: Uuid, title: &str, content: &str) -> Result<Post> {
        let post = self.posts.insert(author_id, title, content).await?;
        tracing::info!(post_id = %post.id, author_id = %author_id, "post created");
        metrics::helpers::record_social_event("post_created");

        Ok(post)
    }

    pub async fn get_with_author(&self, post_id: Uuid) -> Result<PostWithAuthor> {
        self.posts
            .find_with_author(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".into()))
    }

    /// Load, check authorship, then write; a vanished row stays a 404.
    pub async fn update(
        &self,
        actor_id: Uuid,
        post_id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Post> {
        if title.is_none() && content.is_none() {
            return Err(AppError::BadRequest("No fields to update".into()));
        }

        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".into()))?;
        ensure_post_author(actor_id, &post)?;

        let updated = self
            .posts
            .update(post_id, title, content)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".into()))?;
        metrics::helpers::record_social_event("post_updated");

        Ok(updated)
    }

    pub async fn delete(&self, actor_id: Uuid, post_id: Uuid) -> Result<()> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".into()))?;
        ensure_post_author(actor_id, &post)?;

        self.posts.delete(post_id).await?;
        tracing::info!(post_id = %post_id, author_id = %actor_id, "post deleted");
        metrics::helpers::record_social_event("post_deleted");

        Ok(())
    }

    pub async fn list(
        &self,
        author: Option<Uuid>,
        search: Option<&str>,
        ordering: PostOrdering,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<PostWithAuthor>, i64)> {
        let posts = self
            .posts
            .list(author, search, ordering, limit, offset)
            .await?;
        let total = self.posts.count(author, search).await?;

        Ok((posts, total))
    }
}
