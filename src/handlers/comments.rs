use actix_web::{web, HttpResponse};
use serde::Serialize;
use validator::Validate;

use crate::domain::models::Comment;
use crate::domain::requests::{
    clamp_page, CommentListQuery, CreateCommentRequest, PageQuery, UpdateCommentRequest,
};
use crate::error::Result;
use crate::handlers::posts::parse_uuid;
use crate::middleware::UserId;
use crate::services::CommentService;

#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<Comment>,
    pub total_count: i64,
    pub limit: i64,
    pub offset: i64,
}

/// POST /api/v1/posts/{post_id}/comments
pub async fn create_comment(
    user: UserId,
    service: web::Data<CommentService>,
    path: web::Path<String>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;
    let post_id = parse_uuid(&path.into_inner(), "post")?;

    let comment = service.create(user.0, post_id, &payload.content).await?;

    Ok(HttpResponse::Created().json(comment))
}

/// GET /api/v1/posts/{post_id}/comments
pub async fn list_post_comments(
    service: web::Data<CommentService>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let post_id = parse_uuid(&path.into_inner(), "post")?;
    let (limit, offset) = clamp_page(query.limit, query.offset);

    let (comments, total_count) = service.list(Some(post_id), None, limit, offset).await?;

    Ok(HttpResponse::Ok().json(CommentListResponse {
        comments,
        total_count,
        limit,
        offset,
    }))
}

/// GET /api/v1/comments?post=&author=
pub async fn list_comments(
    service: web::Data<CommentService>,
    query: web::Query<CommentListQuery>,
) -> Result<HttpResponse> {
    let (limit, offset) = clamp_page(query.limit, query.offset);

    let (comments, total_count) = service
        .list(query.post, query.author, limit, offset)
        .await?;

    Ok(HttpResponse::Ok().json(CommentListResponse {
        comments,
        total_count,
        limit,
        offset,
    }))
}

/// PUT/PATCH /api/v1/comments/{comment_id}
pub async fn update_comment(
    user: UserId,
    service: web::Data<CommentService>,
    path: web::Path<String>,
    payload: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;
    let comment_id = parse_uuid(&path.into_inner(), "comment")?;

    let comment = service.update(user.0, comment_id, &payload.content).await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// DELETE /api/v1/comments/{comment_id}
pub async fn delete_comment(
    user: UserId,
    service: web::Data<CommentService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let comment_id = parse_uuid(&path.into_inner(), "comment")?;
    service.delete(user.0, comment_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
