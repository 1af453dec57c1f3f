/// HTTP middleware for the social API
///
/// JWT bearer-token authentication plus the ownership checks used by the
/// content services.
pub mod jwt_auth;
pub mod permissions;

pub use jwt_auth::{JwtAuthMiddleware, UserId};
pub use permissions::{ensure_comment_author, ensure_post_author};
