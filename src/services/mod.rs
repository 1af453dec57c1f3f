/// Business rules layer. Services own transactions and the invariants;
/// repositories below them own the SQL.
pub mod comments;
pub mod feed;
pub mod follow;
pub mod likes;
pub mod notifications;
pub mod posts;

pub use comments::CommentService;
pub use feed::FeedService;
pub use follow::FollowService;
pub use likes::{LikeOutcome, LikeService};
pub use notifications::NotificationService;
pub use posts::PostService;
