//! `wp_term_relationships` entity for SeaORM.
//!
//! Pure join table keyed by (`object_id`, `term_taxonomy_id`).

use sea_orm::entity::prelude::*;

use domain::TermRelationship;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wp_term_relationships")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub object_id: u64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub term_taxonomy_id: u64,
    pub term_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::ObjectId",
        to = "super::post::Column::Id"
    )]
    Post,
    #[sea_orm(
        belongs_to = "super::term_taxonomy::Entity",
        from = "Column::TermTaxonomyId",
        to = "super::term_taxonomy::Column::TermTaxonomyId"
    )]
    TermTaxonomy,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::term_taxonomy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TermTaxonomy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TermRelationship {
    fn from(model: Model) -> Self {
        TermRelationship {
            object_id: model.object_id,
            term_taxonomy_id: model.term_taxonomy_id,
            term_order: model.term_order,
        }
    }
}
