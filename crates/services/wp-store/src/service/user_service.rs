//! User service - Handles user-related business logic.

use async_trait::async_trait;
use chrono::Local;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{legacy_hash, verify_legacy_hash, NewUser, UpdateUser, User, UserMeta};

use crate::repository::{Page, PageParams, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: u64) -> AppResult<User>;

    /// Get user by login name
    async fn get_user_by_login(&self, login: &str) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// One page of users
    async fn users_page(&self, params: PageParams) -> AppResult<Page<User>>;

    /// Create a new user, stamping the registration time when unset
    async fn create_user(&self, user: NewUser) -> AppResult<User>;

    /// Update user details
    async fn update_user(&self, id: u64, changes: UpdateUser) -> AppResult<User>;

    /// Store a new password using the legacy digest
    async fn set_password(&self, id: u64, password: &str) -> AppResult<User>;

    /// Check a password against the stored digest.
    ///
    /// `None` when the account uses a hash scheme this crate cannot verify.
    async fn check_password(&self, login: &str, password: &str) -> AppResult<Option<bool>>;

    /// Delete user
    async fn delete_user(&self, id: u64) -> AppResult<()>;

    /// Metadata rows of a user
    async fn user_meta(&self, user_id: u64) -> AppResult<Vec<UserMeta>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: u64) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found()
    }

    async fn get_user_by_login(&self, login: &str) -> AppResult<User> {
        self.repo
            .find_by_login(login)
            .await?
            .ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn users_page(&self, params: PageParams) -> AppResult<Page<User>> {
        self.repo.page(params).await
    }

    async fn create_user(&self, mut user: NewUser) -> AppResult<User> {
        user.stamp_registration(Local::now().naive_local());
        user.field_errors().into_result()?;

        self.repo.create(user).await
    }

    async fn update_user(&self, id: u64, changes: UpdateUser) -> AppResult<User> {
        self.repo.update(id, changes).await
    }

    async fn set_password(&self, id: u64, password: &str) -> AppResult<User> {
        let changes = UpdateUser {
            password_hash: Some(legacy_hash(password)),
            ..UpdateUser::default()
        };
        self.repo.update(id, changes).await
    }

    async fn check_password(&self, login: &str, password: &str) -> AppResult<Option<bool>> {
        let user = self.get_user_by_login(login).await?;
        let verdict = verify_legacy_hash(password, &user.password_hash);
        if verdict.is_none() {
            tracing::warn!(login, "Stored password uses a hash scheme that cannot be verified");
        }
        Ok(verdict)
    }

    async fn delete_user(&self, id: u64) -> AppResult<()> {
        self.repo.delete(id).await
    }

    async fn user_meta(&self, user_id: u64) -> AppResult<Vec<UserMeta>> {
        self.repo.meta(user_id).await
    }
}
