use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

/// GET /health - process liveness
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "social-api"
    }))
}

/// GET /health/ready - verifies a database round trip
pub async fn readiness_check(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "status": "ready",
            "database": "connected"
        })),
        Err(e) => {
            tracing::error!("readiness probe failed: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "not_ready",
                "database": "unavailable"
            }))
        }
    }
}
