//! `wp_posts` entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Select};

use domain::{Post, POST_STATUS_PUBLISH};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wp_posts")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id: u64,
    pub post_author: u64,
    pub post_date: DateTime,
    pub post_date_gmt: DateTime,
    #[sea_orm(column_type = "Text")]
    pub post_content: String,
    #[sea_orm(column_type = "Text")]
    pub post_title: String,
    #[sea_orm(column_type = "Text")]
    pub post_excerpt: String,
    pub post_status: String,
    pub comment_status: String,
    pub ping_status: String,
    pub post_password: String,
    pub post_name: String,
    #[sea_orm(column_type = "Text")]
    pub to_ping: String,
    #[sea_orm(column_type = "Text")]
    pub pinged: String,
    pub post_modified: DateTime,
    pub post_modified_gmt: DateTime,
    #[sea_orm(column_type = "Text")]
    pub post_content_filtered: String,
    pub post_parent: u64,
    pub guid: String,
    pub menu_order: i32,
    pub post_type: String,
    pub post_mime_type: String,
    pub comment_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::post_meta::Entity")]
    PostMeta,
    #[sea_orm(has_many = "super::term_relationship::Entity")]
    TermRelationship,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::post_meta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostMeta.def()
    }
}

impl Related<super::term_relationship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TermRelationship.def()
    }
}

/// posts -> term_relationships -> term_taxonomy
impl Related<super::term_taxonomy::Entity> for Entity {
    fn to() -> RelationDef {
        super::term_relationship::Relation::TermTaxonomy.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::term_relationship::Relation::Post.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Posts whose status is `publish`
    pub fn find_published() -> Select<Entity> {
        Self::find().filter(Column::PostStatus.eq(POST_STATUS_PUBLISH))
    }

    /// All posts, newest publish date first
    pub fn find_latest() -> Select<Entity> {
        Self::find().order_by_desc(Column::PostDate)
    }
}

/// Convert database model to domain entity
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Post {
            id: model.id,
            author_id: model.post_author,
            date: model.post_date,
            date_gmt: model.post_date_gmt,
            title: model.post_title,
            content: model.post_content,
            excerpt: model.post_excerpt,
            status: model.post_status,
            comment_status: model.comment_status,
            ping_status: model.ping_status,
            slug: model.post_name,
            modified: model.post_modified,
            modified_gmt: model.post_modified_gmt,
            parent_id: model.post_parent,
            guid: model.guid,
            menu_order: model.menu_order,
            post_type: model.post_type,
            mime_type: model.post_mime_type,
            comment_count: model.comment_count,
        }
    }
}
