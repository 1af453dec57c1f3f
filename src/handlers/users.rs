use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::handlers::posts::parse_uuid;
use crate::repository::UserRepository;
use crate::services::FollowService;

#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub followers_count: i64,
    pub following_count: i64,
}

/// GET /api/v1/users/{user_id}
pub async fn get_user(
    pool: web::Data<PgPool>,
    follows: web::Data<FollowService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let user_id = parse_uuid(&path.into_inner(), "user")?;

    let user = UserRepository::new(pool.get_ref().clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    let (followers_count, following_count) = follows.counts(user_id).await?;

    Ok(HttpResponse::Ok().json(UserProfileResponse {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        avatar_url: user.avatar_url,
        bio: user.bio,
        created_at: user.created_at,
        followers_count,
        following_count,
    }))
}
