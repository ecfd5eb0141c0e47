//! `wp_term_taxonomy` entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::TermTaxonomy;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wp_term_taxonomy")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub term_taxonomy_id: u64,
    pub term_id: u64,
    pub taxonomy: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub parent: u64,
    pub count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::term::Entity",
        from = "Column::TermId",
        to = "super::term::Column::TermId"
    )]
    Term,
    #[sea_orm(has_many = "super::term_relationship::Entity")]
    TermRelationship,
}

impl Related<super::term::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Term.def()
    }
}

impl Related<super::term_relationship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TermRelationship.def()
    }
}

/// term_taxonomy -> term_relationships -> posts
impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        super::term_relationship::Relation::Post.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::term_relationship::Relation::TermTaxonomy.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TermTaxonomy {
    fn from(model: Model) -> Self {
        TermTaxonomy {
            id: model.term_taxonomy_id,
            term_id: model.term_id,
            taxonomy: model.taxonomy,
            description: model.description,
            parent_id: model.parent,
            count: model.count,
        }
    }
}
