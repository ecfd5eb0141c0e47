//! `wp_postmeta` entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::PostMeta;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wp_postmeta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub meta_id: u64,
    pub post_id: u64,
    pub meta_key: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub meta_value: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PostMeta {
    fn from(model: Model) -> Self {
        PostMeta {
            id: model.meta_id,
            post_id: model.post_id,
            key: model.meta_key,
            value: model.meta_value,
        }
    }
}
