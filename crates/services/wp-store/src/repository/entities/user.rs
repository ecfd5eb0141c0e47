//! `wp_users` entity for SeaORM.

use async_trait::async_trait;
use chrono::Local;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wp_users")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id: u64,
    pub user_login: String,
    pub user_pass: String,
    pub user_nicename: String,
    pub user_email: String,
    pub user_url: String,
    pub user_registered: DateTime,
    pub user_activation_key: String,
    pub user_status: i32,
    pub display_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_meta::Entity")]
    UserMeta,
}

impl Related<super::user_meta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMeta.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamp `user_registered` on insert when the caller left it unset.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.user_registered.is_not_set() {
            self.user_registered = Set(Local::now().naive_local());
        }
        Ok(self)
    }
}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            login: model.user_login,
            password_hash: model.user_pass,
            nicename: model.user_nicename,
            email: model.user_email,
            url: model.user_url,
            registered: model.user_registered,
            activation_key: model.user_activation_key,
            status: model.user_status,
            display_name: model.display_name,
        }
    }
}
