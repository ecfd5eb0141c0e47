//! WordPress Store Library
//!
//! Typed access to an existing WordPress MySQL schema: posts, comments,
//! users, terms/taxonomies, options and links. The tables are never created
//! or migrated here; the entities map onto WordPress's own column names.
//!
//! [`WpStore`] wires the repositories and services around one connection
//! pool. The `wp-store` binary is a thin inspection CLI on top of it.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr};

use crate::config::WpStoreConfig;
use crate::infra::Database;
use crate::repository::{
    CommentStore, PostRepository, PostStore, SiteRepository, SiteStore, TermRepository, TermStore,
    UserStore,
};
use crate::service::{
    CommentManager, CommentService, PostManager, PostService, UserManager, UserService,
};

/// Repositories and services sharing one database connection.
#[derive(Clone)]
pub struct WpStore {
    db: Database,
    posts: Arc<dyn PostService>,
    comments: Arc<dyn CommentService>,
    users: Arc<dyn UserService>,
    terms: Arc<dyn TermRepository>,
    site: Arc<dyn SiteRepository>,
}

impl WpStore {
    /// Connect using `config` and build every store on the new pool.
    pub async fn connect(config: &WpStoreConfig) -> Result<Self, DbErr> {
        let db = Database::connect(&config.database).await?;
        Ok(Self::from_database(db))
    }

    /// Build every store on an existing connection.
    pub fn from_connection(connection: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self::from_database(Database::from_connection(connection))
    }

    fn from_database(db: Database) -> Self {
        let conn = db.get_connection();

        let post_repo: Arc<dyn PostRepository> = Arc::new(PostStore::new(conn.clone()));
        let term_repo: Arc<dyn TermRepository> = Arc::new(TermStore::new(conn.clone()));
        let comment_repo = Arc::new(CommentStore::new(conn.clone()));
        let user_repo = Arc::new(UserStore::new(conn.clone()));
        let site_repo = Arc::new(SiteStore::new(conn));

        Self {
            posts: Arc::new(PostManager::new(post_repo.clone(), term_repo.clone())),
            comments: Arc::new(CommentManager::new(comment_repo, post_repo)),
            users: Arc::new(UserManager::new(user_repo)),
            terms: term_repo,
            site: site_repo,
            db,
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn posts(&self) -> &dyn PostService {
        self.posts.as_ref()
    }

    pub fn comments(&self) -> &dyn CommentService {
        self.comments.as_ref()
    }

    pub fn users(&self) -> &dyn UserService {
        self.users.as_ref()
    }

    pub fn terms(&self) -> &dyn TermRepository {
        self.terms.as_ref()
    }

    /// Options and links
    pub fn site(&self) -> &dyn SiteRepository {
        self.site.as_ref()
    }
}
