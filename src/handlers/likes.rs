use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;

use crate::domain::models::PostLikerEntry;
use crate::domain::requests::{clamp_page, PageQuery};
use crate::error::Result;
use crate::handlers::posts::parse_uuid;
use crate::middleware::UserId;
use crate::services::{LikeOutcome, LikeService};

#[derive(Debug, Serialize)]
pub struct LikersResponse {
    pub likers: Vec<PostLikerEntry>,
    pub total_count: i64,
    pub limit: i64,
    pub offset: i64,
}

/// POST /api/v1/posts/{post_id}/like
///
/// 201 on a fresh like, 200 when the post was already liked.
pub async fn like_post(
    user: UserId,
    service: web::Data<LikeService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_uuid(&path.into_inner(), "post")?;

    match service.like(user.0, post_id).await? {
        LikeOutcome::Created(like) => Ok(HttpResponse::Created().json(like)),
        LikeOutcome::AlreadyLiked(like) => Ok(HttpResponse::Ok().json(like)),
    }
}

/// DELETE /api/v1/posts/{post_id}/like
///
/// 200 when a like was removed, 400 when there was nothing to remove.
pub async fn unlike_post(
    user: UserId,
    service: web::Data<LikeService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_uuid(&path.into_inner(), "post")?;
    service.unlike(user.0, post_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "status": "unliked" })))
}

/// GET /api/v1/posts/{post_id}/likes
pub async fn list_post_likers(
    service: web::Data<LikeService>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let post_id = parse_uuid(&path.into_inner(), "post")?;
    let (limit, offset) = clamp_page(query.limit, query.offset);

    let (likers, total_count) = service.likers(post_id, limit, offset).await?;

    Ok(HttpResponse::Ok().json(LikersResponse {
        likers,
        total_count,
        limit,
        offset,
    }))
}
