use actix_web::{web, HttpResponse};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::PostWithAuthor;
use crate::domain::requests::{
    clamp_page, CreatePostRequest, PostListQuery, PostOrdering, UpdatePostRequest,
};
use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::services::PostService;

/// Public author fields nested in post payloads
#[derive(Debug, Serialize)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author: AuthorSummary,
    pub title: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<PostWithAuthor> for PostResponse {
    fn from(row: PostWithAuthor) -> Self {
        PostResponse {
            id: row.id,
            author: AuthorSummary {
                id: row.author_id,
                username: row.author_username,
                display_name: row.author_display_name,
                avatar_url: row.author_avatar_url,
            },
            title: row.title,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub total_count: i64,
    pub limit: i64,
    pub offset: i64,
}

pub fn parse_uuid(raw: &str, what: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid {} id", what)))
}

fn parse_ordering(raw: Option<&str>) -> Result<PostOrdering> {
    match raw {
        None => Ok(PostOrdering::default()),
        Some(value) => PostOrdering::parse(value).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid ordering '{}', allowed values: {}",
                value,
                PostOrdering::ALLOWED.join(", ")
            ))
        }),
    }
}

/// POST /api/v1/posts
pub async fn create_post(
    user: UserId,
    service: web::Data<PostService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let post = service.create(user.0, &payload.title, &payload.content).await?;
    let full = service.get_with_author(post.id).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(full)))
}

/// GET /api/v1/posts/{post_id}
pub async fn get_post(
    service: web::Data<PostService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_uuid(&path.into_inner(), "post")?;
    let post = service.get_with_author(post_id).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// GET /api/v1/posts?author=&search=&ordering=
pub async fn list_posts(
    service: web::Data<PostService>,
    query: web::Query<PostListQuery>,
) -> Result<HttpResponse> {
    let ordering = parse_ordering(query.ordering.as_deref())?;
    let (limit, offset) = clamp_page(query.limit, query.offset);

    let (posts, total_count) = service
        .list(query.author, query.search.as_deref(), ordering, limit, offset)
        .await?;

    Ok(HttpResponse::Ok().json(PostListResponse {
        posts: posts.into_iter().map(PostResponse::from).collect(),
        total_count,
        limit,
        offset,
    }))
}

/// PUT/PATCH /api/v1/posts/{post_id}
pub async fn update_post(
    user: UserId,
    service: web::Data<PostService>,
    path: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;
    let post_id = parse_uuid(&path.into_inner(), "post")?;

    let post = service
        .update(
            user.0,
            post_id,
            payload.title.as_deref(),
            payload.content.as_deref(),
        )
        .await?;
    let full = service.get_with_author(post.id).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(full)))
}

/// DELETE /api/v1/posts/{post_id}
pub async fn delete_post(
    user: UserId,
    service: web::Data<PostService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_uuid(&path.into_inner(), "post")?;
    service.delete(user.0, post_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
