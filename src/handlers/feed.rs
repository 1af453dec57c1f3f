use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::requests::{clamp_page, PageQuery};
use crate::error::Result;
use crate::handlers::posts::PostResponse;
use crate::middleware::UserId;
use crate::services::FeedService;

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub posts: Vec<PostResponse>,
    pub total_count: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

/// GET /api/v1/feed
///
/// Posts authored by users the viewer follows, newest first. The auth
/// layer rejects anonymous requests before this handler runs.
pub async fn get_feed(
    user: UserId,
    service: web::Data<FeedService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let (limit, offset) = clamp_page(query.limit, query.offset);

    let (posts, total_count) = service.assemble(user.0, limit, offset).await?;
    let has_more = offset + (posts.len() as i64) < total_count;

    Ok(HttpResponse::Ok().json(FeedResponse {
        posts: posts.into_iter().map(PostResponse::from).collect(),
        total_count,
        limit,
        offset,
        has_more,
    }))
}
