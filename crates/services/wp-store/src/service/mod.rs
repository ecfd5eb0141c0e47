//! Service layer - business rules on top of the repositories.

mod comment_service;
mod post_service;
mod user_service;

pub use comment_service::{CommentManager, CommentService};
pub use post_service::{PostManager, PostService};
pub use user_service::{UserManager, UserService};
