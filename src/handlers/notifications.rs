use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;

use crate::domain::models::Notification;
use crate::domain::requests::{clamp_page, NotificationListQuery};
use crate::error::Result;
use crate::handlers::posts::parse_uuid;
use crate::middleware::UserId;
use crate::services::NotificationService;

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
    pub limit: i64,
    pub offset: i64,
}

/// GET /api/v1/notifications?unread=true|false
pub async fn list_notifications(
    user: UserId,
    service: web::Data<NotificationService>,
    query: web::Query<NotificationListQuery>,
) -> Result<HttpResponse> {
    let (limit, offset) = clamp_page(query.limit, query.offset);
    let unread_only = query.unread.unwrap_or(false);

    let notifications = service.list(user.0, unread_only, limit, offset).await?;

    Ok(HttpResponse::Ok().json(NotificationListResponse {
        notifications,
        limit,
        offset,
    }))
}

/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    user: UserId,
    service: web::Data<NotificationService>,
) -> Result<HttpResponse> {
    let count = service.unread_count(user.0).await?;

    Ok(HttpResponse::Ok().json(json!({ "unread_count": count })))
}

/// POST /api/v1/notifications/{id}/read
pub async fn mark_read(
    user: UserId,
    service: web::Data<NotificationService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let notification_id = parse_uuid(&path.into_inner(), "notification")?;
    service.mark_read(user.0, notification_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}

/// POST /api/v1/notifications/read-all
pub async fn mark_all_read(
    user: UserId,
    service: web::Data<NotificationService>,
) -> Result<HttpResponse> {
    let updated = service.mark_all_read(user.0).await?;

    Ok(HttpResponse::Ok().json(json!({ "updated": updated })))
}
