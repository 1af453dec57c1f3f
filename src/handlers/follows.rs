use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::models::FollowListEntry;
use crate::domain::requests::{clamp_page, PageQuery};
use crate::error::Result;
use crate::handlers::posts::parse_uuid;
use crate::middleware::UserId;
use crate::services::FollowService;

#[derive(Debug, Serialize)]
pub struct FollowResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FollowListResponse {
    pub users: Vec<FollowListEntry>,
    pub limit: i64,
    pub offset: i64,
}

/// POST /api/v1/follow/{user_id}
///
/// Idempotent: both a fresh edge and a repeat are 200.
pub async fn follow_user(
    user: UserId,
    service: web::Data<FollowService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let target_id = parse_uuid(&path.into_inner(), "user")?;
    service.follow(user.0, target_id).await?;

    Ok(HttpResponse::Ok().json(FollowResponse { status: "ok" }))
}

/// POST /api/v1/unfollow/{user_id}
pub async fn unfollow_user(
    user: UserId,
    service: web::Data<FollowService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let target_id = parse_uuid(&path.into_inner(), "user")?;
    service.unfollow(user.0, target_id).await?;

    Ok(HttpResponse::Ok().json(FollowResponse { status: "ok" }))
}

/// GET /api/v1/users/{user_id}/followers
pub async fn get_followers(
    service: web::Data<FollowService>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let user_id = parse_uuid(&path.into_inner(), "user")?;
    let (limit, offset) = clamp_page(query.limit, query.offset);

    let users = service.followers(user_id, limit, offset).await?;

    Ok(HttpResponse::Ok().json(FollowListResponse {
        users,
        limit,
        offset,
    }))
}

/// GET /api/v1/users/{user_id}/following
pub async fn get_following(
    service: web::Data<FollowService>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let user_id = parse_uuid(&path.into_inner(), "user")?;
    let (limit, offset) = clamp_page(query.limit, query.offset);

    let users = service.following(user_id, limit, offset).await?;

    Ok(HttpResponse::Ok().json(FollowListResponse {
        users,
        limit,
        offset,
    }))
}
