//! Post service - posts, permalinks and their tags/categories.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{
    NewPost, Permalink, Post, PostFilter, PostMeta, Term, UpdatePost, TAXONOMY_CATEGORY,
    TAXONOMY_POST_TAG,
};

use crate::repository::{PostRepository, TermRepository};

/// Post service trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// Get post by ID
    async fn get_post(&self, id: u64) -> AppResult<Post>;

    /// Post published on `year-month-day` under `slug`, if any
    async fn find_by_permalink(
        &self,
        year: i32,
        month: u32,
        day: u32,
        slug: &str,
    ) -> AppResult<Option<Post>>;

    /// Same lookup from a `/YYYY/MM/DD/slug/` path
    async fn find_by_permalink_path(&self, path: &str) -> AppResult<Option<Post>>;

    /// Posts matching the filter, newest first
    async fn list_posts(&self, filter: PostFilter) -> AppResult<Vec<Post>>;

    /// Posts with published status, newest first
    async fn published_posts(&self, limit: Option<u64>) -> AppResult<Vec<Post>>;

    async fn create_post(&self, post: NewPost) -> AppResult<Post>;

    async fn update_post(&self, id: u64, changes: UpdatePost) -> AppResult<Post>;

    async fn delete_post(&self, id: u64) -> AppResult<()>;

    async fn post_meta(&self, post_id: u64) -> AppResult<Vec<PostMeta>>;

    /// Terms attached under the `post_tag` taxonomy
    async fn tags(&self, post_id: u64) -> AppResult<Vec<Term>>;

    /// Terms attached under the `category` taxonomy
    async fn categories(&self, post_id: u64) -> AppResult<Vec<Term>>;

    /// Posts carrying a term, newest first
    async fn term_posts(&self, term_id: u64) -> AppResult<Vec<Post>>;

    /// Attach an existing tag (by slug) to a post
    async fn tag_post(&self, post_id: u64, tag_slug: &str) -> AppResult<()>;

    /// Detach a tag (by slug) from a post
    async fn untag_post(&self, post_id: u64, tag_slug: &str) -> AppResult<()>;
}

/// Concrete implementation of PostService using repositories.
pub struct PostManager {
    posts: Arc<dyn PostRepository>,
    terms: Arc<dyn TermRepository>,
}

impl PostManager {
    /// Create new post service instance with repositories
    pub fn new(posts: Arc<dyn PostRepository>, terms: Arc<dyn TermRepository>) -> Self {
        Self { posts, terms }
    }

    async fn tag_taxonomy_id(&self, tag_slug: &str) -> AppResult<u64> {
        let (_, taxonomy) = self
            .terms
            .find_by_slug(tag_slug, TAXONOMY_POST_TAG)
            .await?
            .ok_or_not_found()?;
        Ok(taxonomy.id)
    }
}

#[async_trait]
impl PostService for PostManager {
    async fn get_post(&self, id: u64) -> AppResult<Post> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_not_found()
    }

    async fn find_by_permalink(
        &self,
        year: i32,
        month: u32,
        day: u32,
        slug: &str,
    ) -> AppResult<Option<Post>> {
        let permalink = Permalink::new(year, month, day, slug);
        self.posts.find_by_permalink(&permalink).await
    }

    async fn find_by_permalink_path(&self, path: &str) -> AppResult<Option<Post>> {
        let permalink = Permalink::parse(path)?;
        self.posts.find_by_permalink(&permalink).await
    }

    async fn list_posts(&self, filter: PostFilter) -> AppResult<Vec<Post>> {
        self.posts.list(filter).await
    }

    async fn published_posts(&self, limit: Option<u64>) -> AppResult<Vec<Post>> {
        let filter = PostFilter {
            limit,
            ..PostFilter::published()
        };
        self.posts.list(filter).await
    }

    async fn create_post(&self, post: NewPost) -> AppResult<Post> {
        if post.slug.trim().is_empty() {
            return Err(AppError::validation("Post slug cannot be empty"));
        }
        self.posts.create(post).await
    }

    async fn update_post(&self, id: u64, changes: UpdatePost) -> AppResult<Post> {
        self.posts.update(id, changes).await
    }

    async fn delete_post(&self, id: u64) -> AppResult<()> {
        self.posts.delete(id).await
    }

    async fn post_meta(&self, post_id: u64) -> AppResult<Vec<PostMeta>> {
        self.posts.meta(post_id).await
    }

    async fn tags(&self, post_id: u64) -> AppResult<Vec<Term>> {
        self.terms.terms_for_post(post_id, TAXONOMY_POST_TAG).await
    }

    async fn categories(&self, post_id: u64) -> AppResult<Vec<Term>> {
        self.terms.terms_for_post(post_id, TAXONOMY_CATEGORY).await
    }

    async fn term_posts(&self, term_id: u64) -> AppResult<Vec<Post>> {
        self.terms.posts_for_term(term_id).await
    }

    async fn tag_post(&self, post_id: u64, tag_slug: &str) -> AppResult<()> {
        self.posts.find_by_id(post_id).await?.ok_or_not_found()?;
        let term_taxonomy_id = self.tag_taxonomy_id(tag_slug).await?;
        self.terms.attach(post_id, term_taxonomy_id).await?;
        Ok(())
    }

    async fn untag_post(&self, post_id: u64, tag_slug: &str) -> AppResult<()> {
        let term_taxonomy_id = self.tag_taxonomy_id(tag_slug).await?;
        self.terms.detach(post_id, term_taxonomy_id).await
    }
}
