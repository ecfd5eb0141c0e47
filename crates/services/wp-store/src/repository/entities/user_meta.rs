//! `wp_usermeta` entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::UserMeta;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wp_usermeta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub umeta_id: u64,
    pub user_id: u64,
    pub meta_key: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub meta_value: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UserMeta {
    fn from(model: Model) -> Self {
        UserMeta {
            id: model.umeta_id,
            user_id: model.user_id,
            key: model.meta_key,
            value: model.meta_value,
        }
    }
}
