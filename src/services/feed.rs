/// Feed assembly: posts authored by the viewer's followees, newest first
/// with id as the tiebreak. Following nobody yields an empty page.
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::models::PostWithAuthor;
use crate::error::Result;
use crate::metrics;
use crate::repository::PostRepository;

#[derive(Clone)]
pub struct FeedService {
    posts: PostRepository,
}

impl FeedService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            posts: PostRepository::new(pool),
        }
    }

    pub async fn assemble(
        &self,
        viewer_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<PostWithAuthor>, i64)> {
        let timer = metrics::FEED_REQUEST_DURATION_SECONDS
            .with_label_values(&["ok"])
            .start_timer();

        let (posts, total) = tokio::try_join!(
            self.posts.feed_page(viewer_id, limit, offset),
            self.posts.feed_total(viewer_id)
        )?;

        timer.observe_duration();
        tracing::debug!(viewer_id = %viewer_id, count = posts.len(), "feed page assembled");

        Ok((posts, total))
    }
}
