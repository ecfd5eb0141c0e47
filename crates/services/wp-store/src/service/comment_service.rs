//! Comment service - presence validation and the closed-post gate.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{Comment, NewComment, UpdateComment, COMMENTS_CLOSED_MESSAGE, MISSING_POST_MESSAGE};

use crate::repository::{CommentRepository, PostRepository};

/// Comment service trait for dependency injection.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Get comment by ID
    async fn get_comment(&self, id: u64) -> AppResult<Comment>;

    /// Comments on a post, oldest first
    async fn post_comments(&self, post_id: u64) -> AppResult<Vec<Comment>>;

    /// Validate and store a new comment.
    ///
    /// Fails with [`AppError::Invalid`] carrying one error per blank required
    /// field and, when the parent post does not accept comments, a base
    /// error. Nothing is written in that case.
    async fn create_comment(&self, input: NewComment) -> AppResult<Comment>;

    /// Update comment details; provided values must not be blank
    async fn update_comment(&self, id: u64, changes: UpdateComment) -> AppResult<Comment>;

    /// Delete comment
    async fn delete_comment(&self, id: u64) -> AppResult<()>;
}

/// Concrete implementation of CommentService using repositories.
pub struct CommentManager {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentManager {
    /// Create new comment service instance with repositories
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }
}

#[async_trait]
impl CommentService for CommentManager {
    async fn get_comment(&self, id: u64) -> AppResult<Comment> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or_not_found()
    }

    async fn post_comments(&self, post_id: u64) -> AppResult<Vec<Comment>> {
        self.comments.list_for_post(post_id).await
    }

    async fn create_comment(&self, input: NewComment) -> AppResult<Comment> {
        let input = input.sanitized();
        let mut errors = input.field_errors();

        // Checked against the stored post on every create, whatever else is wrong
        if let Some(post_id) = input.post_id {
            match self.posts.find_by_id(post_id).await? {
                Some(post) if !post.accepts_comments() => {
                    errors.add_to_base(COMMENTS_CLOSED_MESSAGE);
                }
                Some(_) => {}
                None => errors.add("post_id", MISSING_POST_MESSAGE),
            }
        }

        if !errors.is_empty() {
            tracing::info!(
                post_id = ?input.post_id,
                errors = %errors,
                "Comment rejected"
            );
            return Err(AppError::Invalid(errors));
        }

        let draft = input.into_draft()?;
        self.comments.create(draft).await
    }

    async fn update_comment(&self, id: u64, changes: UpdateComment) -> AppResult<Comment> {
        let changes = changes.sanitized();
        changes.field_errors().into_result()?;
        self.comments.update(id, changes).await
    }

    async fn delete_comment(&self, id: u64) -> AppResult<()> {
        self.comments.delete(id).await
    }
}
