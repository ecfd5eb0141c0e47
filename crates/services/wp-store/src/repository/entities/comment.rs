//! `wp_comments` entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Comment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wp_comments")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "comment_ID")]
    pub comment_id: u64,
    #[sea_orm(column_name = "comment_post_ID")]
    pub comment_post_id: u64,
    #[sea_orm(column_type = "Text")]
    pub comment_author: String,
    pub comment_author_email: String,
    pub comment_author_url: String,
    #[sea_orm(column_name = "comment_author_IP")]
    pub comment_author_ip: String,
    pub comment_date: DateTime,
    pub comment_date_gmt: DateTime,
    #[sea_orm(column_type = "Text")]
    pub comment_content: String,
    pub comment_karma: i32,
    pub comment_approved: String,
    pub comment_agent: String,
    pub comment_type: String,
    pub comment_parent: u64,
    pub user_id: u64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::CommentPostId",
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

/// Convert database model to domain entity
impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Comment {
            id: model.comment_id,
            post_id: model.comment_post_id,
            author: model.comment_author,
            author_email: model.comment_author_email,
            author_url: model.comment_author_url,
            author_ip: model.comment_author_ip,
            date: model.comment_date,
            date_gmt: model.comment_date_gmt,
            content: model.comment_content,
            karma: model.comment_karma,
            approved: model.comment_approved,
            agent: model.comment_agent,
            comment_type: model.comment_type,
            parent_id: model.comment_parent,
            user_id: model.user_id,
        }
    }
}
