//! `wp_links` entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Link;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wp_links")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub link_id: u64,
    pub link_url: String,
    pub link_name: String,
    pub link_image: String,
    pub link_target: String,
    pub link_description: String,
    pub link_visible: String,
    pub link_owner: u64,
    pub link_rating: i32,
    pub link_updated: DateTime,
    pub link_rel: String,
    #[sea_orm(column_type = "Text")]
    pub link_notes: String,
    pub link_rss: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Link {
    fn from(model: Model) -> Self {
        Link {
            id: model.link_id,
            url: model.link_url,
            name: model.link_name,
            image: model.link_image,
            target: model.link_target,
            description: model.link_description,
            visible: model.link_visible,
            owner_id: model.link_owner,
            rating: model.link_rating,
            updated: model.link_updated,
            rel: model.link_rel,
            notes: model.link_notes,
            rss: model.link_rss,
        }
    }
}
