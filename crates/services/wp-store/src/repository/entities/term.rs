//! `wp_terms` entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Term;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wp_terms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub term_id: u64,
    pub name: String,
    pub slug: String,
    pub term_group: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::term_taxonomy::Entity")]
    TermTaxonomy,
}

impl Related<super::term_taxonomy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TermTaxonomy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Term {
    fn from(model: Model) -> Self {
        Term {
            id: model.term_id,
            name: model.name,
            slug: model.slug,
            group: model.term_group,
        }
    }
}
