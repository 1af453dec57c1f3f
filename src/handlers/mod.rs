/// HTTP layer: handlers plus route registration.
///
/// Reads on posts, comments and profiles are open; mutations on those
/// resources authenticate through the `UserId` extractor. Routes that only
/// exist for an authenticated user (feed, follow graph writes, the
/// notification inbox) sit behind `JwtAuthMiddleware` in a nested scope,
/// which must be registered last because its empty prefix matches
/// everything.
pub mod comments;
pub mod feed;
pub mod follows;
pub mod health;
pub mod likes;
pub mod notifications;
pub mod posts;
pub mod users;

use actix_web::web;

use crate::middleware::JwtAuthMiddleware;

/// Registers everything under the versioned API scope.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .service(
                web::resource("")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post)),
            )
            .service(
                web::resource("/{post_id}")
                    .route(web::get().to(posts::get_post))
                    .route(web::put().to(posts::update_post))
                    .route(web::patch().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post)),
            )
            .service(
                web::resource("/{post_id}/comments")
                    .route(web::get().to(comments::list_post_comments))
                    .route(web::post().to(comments::create_comment)),
            )
            .service(
                web::resource("/{post_id}/like")
                    .route(web::post().to(likes::like_post))
                    .route(web::delete().to(likes::unlike_post)),
            )
            .service(
                web::resource("/{post_id}/likes").route(web::get().to(likes::list_post_likers)),
            ),
    )
    .service(web::resource("/comments").route(web::get().to(comments::list_comments)))
    .service(
        web::resource("/comments/{comment_id}")
            .route(web::put().to(comments::update_comment))
            .route(web::patch().to(comments::update_comment))
            .route(web::delete().to(comments::delete_comment)),
    )
    .service(
        web::scope("/users")
            .service(web::resource("/{user_id}").route(web::get().to(users::get_user)))
            .service(
                web::resource("/{user_id}/followers").route(web::get().to(follows::get_followers)),
            )
            .service(
                web::resource("/{user_id}/following").route(web::get().to(follows::get_following)),
            ),
    )
    .service(
        web::scope("")
            .wrap(JwtAuthMiddleware)
            .service(web::resource("/feed").route(web::get().to(feed::get_feed)))
            .service(web::resource("/follow/{user_id}").route(web::post().to(follows::follow_user)))
            .service(
                web::resource("/unfollow/{user_id}")
                    .route(web::post().to(follows::unfollow_user)),
            )
            .service(
                web::scope("/notifications")
                    .service(
                        web::resource("").route(web::get().to(notifications::list_notifications)),
                    )
                    .service(
                        web::resource("/unread-count")
                            .route(web::get().to(notifications::unread_count)),
                    )
                    .service(
                        web::resource("/read-all")
                            .route(web::post().to(notifications::mark_all_read)),
                    )
                    .service(
                        web::resource("/{notification_id}/read")
                            .route(web::post().to(notifications::mark_read)),
                    ),
            ),
    );
}
