//! User repository: `wp_users` and its `wp_usermeta` rows.

use async_trait::async_trait;
use std::sync::Arc;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::base::{Page, PageParams, Table};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::entities::user_meta::{self, Entity as UserMetaEntity};
use common::{AppError, AppResult};
use domain::{NewUser, UpdateUser, User, UserMeta};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by `ID`
    async fn find_by_id(&self, id: u64) -> AppResult<Option<User>>;

    /// Find user by `user_login`
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Create a new user; an unset registration time is stamped on insert
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Update user fields
    async fn update(&self, id: u64, changes: UpdateUser) -> AppResult<User>;

    /// Delete user by `ID`
    async fn delete(&self, id: u64) -> AppResult<()>;

    /// List all users, by login
    async fn list(&self) -> AppResult<Vec<User>>;

    /// One page of users in `ID` order
    async fn page(&self, params: PageParams) -> AppResult<Page<User>>;

    /// Metadata rows of a user (users.ID = usermeta.user_id)
    async fn meta(&self, user_id: u64) -> AppResult<Vec<UserMeta>>;

    /// First value stored under `key` for a user
    async fn meta_value(&self, user_id: u64, key: &str) -> AppResult<Option<String>>;

    async fn add_meta(&self, user_id: u64, key: String, value: String) -> AppResult<UserMeta>;

    /// Delete meta row by `umeta_id`
    async fn delete_meta(&self, meta_id: u64) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    users: Table<UserEntity>,
    meta: Table<UserMetaEntity>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            users: Table::new(db.clone()),
            meta: Table::new(db),
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: u64) -> AppResult<Option<User>> {
        let result = self.users.find_by_id(id).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::UserLogin.eq(login))
            .one(self.users.db())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let nicename = new_user.nicename();
        let active_model = ActiveModel {
            user_login: Set(new_user.login),
            user_pass: Set(new_user.password_hash),
            user_nicename: Set(nicename),
            user_email: Set(new_user.email),
            user_url: Set(new_user.url),
            user_registered: match new_user.registered {
                Some(registered) => Set(registered),
                None => NotSet,
            },
            user_activation_key: Set(String::new()),
            user_status: Set(0),
            display_name: Set(new_user.display_name),
            ..Default::default()
        };

        let model = self.users.insert(active_model).await?;
        tracing::debug!(user_id = model.id, login = %model.user_login, "User created");
        Ok(User::from(model))
    }

    async fn update(&self, id: u64, changes: UpdateUser) -> AppResult<User> {
        let user = self.users.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = user.into();

        if let Some(email) = changes.email {
            active.user_email = Set(email);
        }
        if let Some(url) = changes.url {
            active.user_url = Set(url);
        }
        if let Some(display_name) = changes.display_name {
            active.display_name = Set(display_name);
        }
        if let Some(password_hash) = changes.password_hash {
            active.user_pass = Set(password_hash);
        }

        let model = self.users.update(active).await?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: u64) -> AppResult<()> {
        if self.users.delete_by_id(id).await? == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::UserLogin)
            .all(self.users.db())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn page(&self, params: PageParams) -> AppResult<Page<User>> {
        let page = self.users.page(&params).await?;
        Ok(page.map(User::from))
    }

    async fn meta(&self, user_id: u64) -> AppResult<Vec<UserMeta>> {
        let models = UserMetaEntity::find()
            .filter(user_meta::Column::UserId.eq(user_id))
            .order_by_asc(user_meta::Column::UmetaId)
            .all(self.users.db())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(UserMeta::from).collect())
    }

    async fn meta_value(&self, user_id: u64, key: &str) -> AppResult<Option<String>> {
        let result = UserMetaEntity::find()
            .filter(user_meta::Column::UserId.eq(user_id))
            .filter(user_meta::Column::MetaKey.eq(key))
            .order_by_asc(user_meta::Column::UmetaId)
            .one(self.users.db())
            .await
            .map_err(AppError::from)?;

        Ok(result.and_then(|model| model.meta_value))
    }

    async fn add_meta(&self, user_id: u64, key: String, value: String) -> AppResult<UserMeta> {
        let active_model = user_meta::ActiveModel {
            user_id: Set(user_id),
            meta_key: Set(Some(key)),
            meta_value: Set(Some(value)),
            ..Default::default()
        };

        let model = self.meta.insert(active_model).await?;
        Ok(UserMeta::from(model))
    }

    async fn delete_meta(&self, meta_id: u64) -> AppResult<()> {
        if self.meta.delete_by_id(meta_id).await? == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
