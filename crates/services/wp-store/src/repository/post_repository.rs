//! Post repository: `wp_posts` and its `wp_postmeta` rows.

use async_trait::async_trait;
use std::sync::Arc;
use chrono::{Local, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::base::Table;
use super::entities::post::{self, Entity as PostEntity};
use super::entities::post_meta::{self, Entity as PostMetaEntity};
use common::{AppError, AppResult};
use domain::{NewPost, Permalink, Post, PostFilter, PostMeta, UpdatePost, COMMENT_STATUS_OPEN};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Post repository trait for dependency injection.
///
/// Lists come back newest publish date first unless stated otherwise.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by `ID`
    async fn find_by_id(&self, id: u64) -> AppResult<Option<Post>>;

    /// First post published on the permalink's calendar day with a matching
    /// `post_name`. `None` for impossible dates.
    async fn find_by_permalink(&self, permalink: &Permalink) -> AppResult<Option<Post>>;

    /// Posts matching the filter
    async fn list(&self, filter: PostFilter) -> AppResult<Vec<Post>>;

    /// Insert a post
    async fn create(&self, post: NewPost) -> AppResult<Post>;

    /// Update post fields
    async fn update(&self, id: u64, changes: UpdatePost) -> AppResult<Post>;

    /// Delete post by `ID`; comments, meta and term relationships are left in place
    async fn delete(&self, id: u64) -> AppResult<()>;

    /// Metadata rows of a post (posts.ID = postmeta.post_id)
    async fn meta(&self, post_id: u64) -> AppResult<Vec<PostMeta>>;

    /// First value stored under `key` for a post
    async fn meta_value(&self, post_id: u64, key: &str) -> AppResult<Option<String>>;

    /// Append a metadata row
    async fn add_meta(&self, post_id: u64, key: String, value: String) -> AppResult<PostMeta>;

    /// Delete a metadata row by `meta_id`
    async fn delete_meta(&self, meta_id: u64) -> AppResult<()>;
}

/// Concrete implementation of PostRepository
pub struct PostStore {
    posts: Table<PostEntity>,
    meta: Table<PostMetaEntity>,
}

impl PostStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            posts: Table::new(db.clone()),
            meta: Table::new(db),
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.posts.db()
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn find_by_id(&self, id: u64) -> AppResult<Option<Post>> {
        let result = self.posts.find_by_id(id).await?;
        Ok(result.map(Post::from))
    }

    async fn find_by_permalink(&self, permalink: &Permalink) -> AppResult<Option<Post>> {
        let Some((start, end)) = permalink.day_range() else {
            tracing::debug!(%permalink, "Permalink does not name a calendar day");
            return Ok(None);
        };

        let result = PostEntity::find_latest()
            .filter(post::Column::PostDate.gte(start))
            .filter(post::Column::PostDate.lt(end))
            .filter(post::Column::PostName.eq(permalink.slug.as_str()))
            .one(self.db())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Post::from))
    }

    async fn list(&self, filter: PostFilter) -> AppResult<Vec<Post>> {
        let mut query = if filter.published_only {
            PostEntity::find_published()
        } else {
            PostEntity::find()
        };
        if let Some(post_type) = filter.post_type {
            query = query.filter(post::Column::PostType.eq(post_type));
        }
        query = query.order_by_desc(post::Column::PostDate);
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let models = query.all(self.db()).await.map_err(AppError::from)?;
        Ok(models.into_iter().map(Post::from).collect())
    }

    async fn create(&self, new_post: NewPost) -> AppResult<Post> {
        let date = new_post.date.unwrap_or_else(|| Local::now().naive_local());
        let date_gmt = Utc::now().naive_utc();

        let active_model = post::ActiveModel {
            post_author: Set(new_post.author_id),
            post_date: Set(date),
            post_date_gmt: Set(date_gmt),
            post_content: Set(new_post.content),
            post_title: Set(new_post.title),
            post_excerpt: Set(new_post.excerpt),
            post_status: Set(new_post.status),
            comment_status: Set(new_post.comment_status),
            ping_status: Set(COMMENT_STATUS_OPEN.to_string()),
            post_password: Set(String::new()),
            post_name: Set(new_post.slug),
            to_ping: Set(String::new()),
            pinged: Set(String::new()),
            post_modified: Set(date),
            post_modified_gmt: Set(date_gmt),
            post_content_filtered: Set(String::new()),
            post_parent: Set(0),
            guid: Set(String::new()),
            menu_order: Set(0),
            post_type: Set(new_post.post_type),
            post_mime_type: Set(String::new()),
            comment_count: Set(0),
            ..Default::default()
        };

        let model = self.posts.insert(active_model).await?;
        tracing::debug!(post_id = model.id, "Post created");
        Ok(Post::from(model))
    }

    async fn update(&self, id: u64, changes: UpdatePost) -> AppResult<Post> {
        let post = self.posts.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        let mut active: post::ActiveModel = post.into();

        if let Some(title) = changes.title {
            active.post_title = Set(title);
        }
        if let Some(slug) = changes.slug {
            active.post_name = Set(slug);
        }
        if let Some(content) = changes.content {
            active.post_content = Set(content);
        }
        if let Some(excerpt) = changes.excerpt {
            active.post_excerpt = Set(excerpt);
        }
        if let Some(status) = changes.status {
            active.post_status = Set(status);
        }
        if let Some(comment_status) = changes.comment_status {
            active.comment_status = Set(comment_status);
        }
        if let Some(date) = changes.date {
            active.post_date = Set(date);
        }
        active.post_modified = Set(Local::now().naive_local());
        active.post_modified_gmt = Set(Utc::now().naive_utc());

        let model = self.posts.update(active).await?;
        Ok(Post::from(model))
    }

    async fn delete(&self, id: u64) -> AppResult<()> {
        if self.posts.delete_by_id(id).await? == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn meta(&self, post_id: u64) -> AppResult<Vec<PostMeta>> {
        let models = PostMetaEntity::find()
            .filter(post_meta::Column::PostId.eq(post_id))
            .order_by_asc(post_meta::Column::MetaId)
            .all(self.db())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(PostMeta::from).collect())
    }

    async fn meta_value(&self, post_id: u64, key: &str) -> AppResult<Option<String>> {
        let result = PostMetaEntity::find()
            .filter(post_meta::Column::PostId.eq(post_id))
            .filter(post_meta::Column::MetaKey.eq(key))
            .order_by_asc(post_meta::Column::MetaId)
            .one(self.db())
            .await
            .map_err(AppError::from)?;

        Ok(result.and_then(|model| model.meta_value))
    }

    async fn add_meta(&self, post_id: u64, key: String, value: String) -> AppResult<PostMeta> {
        let active_model = post_meta::ActiveModel {
            post_id: Set(post_id),
            meta_key: Set(Some(key)),
            meta_value: Set(Some(value)),
            ..Default::default()
        };

        let model = self.meta.insert(active_model).await?;
        Ok(PostMeta::from(model))
    }

    async fn delete_meta(&self, meta_id: u64) -> AppResult<()> {
        if self.meta.delete_by_id(meta_id).await? == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
