use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use std::io;
use std::time::Duration;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use social_api::handlers;
use social_api::metrics;
use social_api::services::{
    CommentService, FeedService, FollowService, LikeService, NotificationService, PostService,
};
use social_api::{auth, Config};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting social-api v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    if let Err(e) = auth::initialize_secret(&config.auth.jwt_secret) {
        tracing::error!("JWT key initialization failed: {:#}", e);
        std::process::exit(1);
    }

    // Database pool
    let pool = match PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.database.url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database connection failed: {:#}", e);
            eprintln!("ERROR: Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // Verify database connection
    if let Err(e) = sqlx::query("SELECT 1").execute(&pool).await {
        tracing::error!("Database verification failed: {:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::error!("Database migration failed: {:#}", e);
        std::process::exit(1);
    }
    tracing::info!("Database migrations applied");

    let follow_service = FollowService::new(pool.clone());
    let post_service = PostService::new(pool.clone());
    let comment_service = CommentService::new(pool.clone());
    let like_service = LikeService::new(pool.clone());
    let feed_service = FeedService::new(pool.clone());
    let notification_service = NotificationService::new(pool.clone());

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let cors_origins = config.cors.allowed_origins.clone();
    let workers = config.app.workers;

    let mut server = HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in cors_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(follow_service.clone()))
            .app_data(web::Data::new(post_service.clone()))
            .app_data(web::Data::new(comment_service.clone()))
            .app_data(web::Data::new(like_service.clone()))
            .app_data(web::Data::new(feed_service.clone()))
            .app_data(web::Data::new(notification_service.clone()))
            .route("/health", web::get().to(handlers::health::health_check))
            .route(
                "/health/ready",
                web::get().to(handlers::health::readiness_check),
            )
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .service(web::scope("/api/v1").configure(handlers::configure_api))
    })
    .bind(&bind_address)?;

    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await
}
