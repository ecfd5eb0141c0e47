//! Comment repository: `wp_comments`.
//!
//! Writes here assume the input already passed validation; the comment
//! service owns the presence checks and the closed-post gate.

use async_trait::async_trait;
use std::sync::Arc;
use chrono::{Local, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::base::Table;
use super::entities::comment::{self, Entity as CommentEntity};
use common::{AppError, AppResult};
use domain::{Comment, CommentDraft, UpdateComment};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Comment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by `comment_ID`
    async fn find_by_id(&self, id: u64) -> AppResult<Option<Comment>>;

    /// Comments on a post, oldest first (posts.ID = comments.comment_post_ID)
    async fn list_for_post(&self, post_id: u64) -> AppResult<Vec<Comment>>;

    /// Insert a validated comment
    async fn create(&self, draft: CommentDraft) -> AppResult<Comment>;

    /// Update comment fields
    async fn update(&self, id: u64, changes: UpdateComment) -> AppResult<Comment>;

    /// Delete comment by `comment_ID`
    async fn delete(&self, id: u64) -> AppResult<()>;
}

/// Concrete implementation of CommentRepository
pub struct CommentStore {
    comments: Table<CommentEntity>,
}

impl CommentStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            comments: Table::new(db),
        }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn find_by_id(&self, id: u64) -> AppResult<Option<Comment>> {
        let result = self.comments.find_by_id(id).await?;
        Ok(result.map(Comment::from))
    }

    async fn list_for_post(&self, post_id: u64) -> AppResult<Vec<Comment>> {
        let models = CommentEntity::find()
            .filter(comment::Column::CommentPostId.eq(post_id))
            .order_by_asc(comment::Column::CommentDate)
            .all(self.comments.db())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Comment::from).collect())
    }

    async fn create(&self, draft: CommentDraft) -> AppResult<Comment> {
        let active_model = comment::ActiveModel {
            comment_post_id: Set(draft.post_id),
            comment_author: Set(draft.author),
            comment_author_email: Set(draft.author_email),
            comment_author_url: Set(draft.author_url),
            comment_author_ip: Set(draft.author_ip),
            comment_date: Set(Local::now().naive_local()),
            comment_date_gmt: Set(Utc::now().naive_utc()),
            comment_content: Set(draft.content),
            comment_karma: Set(0),
            comment_approved: Set(draft.approved),
            comment_agent: Set(draft.agent),
            comment_type: Set(String::new()),
            comment_parent: Set(draft.parent_id),
            user_id: Set(draft.user_id),
            ..Default::default()
        };

        let model = self.comments.insert(active_model).await?;
        tracing::debug!(
            comment_id = model.comment_id,
            post_id = model.comment_post_id,
            "Comment created"
        );
        Ok(Comment::from(model))
    }

    async fn update(&self, id: u64, changes: UpdateComment) -> AppResult<Comment> {
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: comment::ActiveModel = comment.into();

        if let Some(author) = changes.author {
            active.comment_author = Set(author);
        }
        if let Some(author_email) = changes.author_email {
            active.comment_author_email = Set(author_email);
        }
        if let Some(content) = changes.content {
            active.comment_content = Set(content);
        }
        if let Some(author_url) = changes.author_url {
            active.comment_author_url = Set(author_url);
        }
        if let Some(approved) = changes.approved {
            active.comment_approved = Set(approved);
        }

        let model = self.comments.update(active).await?;
        Ok(Comment::from(model))
    }

    async fn delete(&self, id: u64) -> AppResult<()> {
        if self.comments.delete_by_id(id).await? == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
