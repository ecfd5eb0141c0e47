//! `wp_options` entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::SiteOption;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wp_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub option_id: u64,
    #[sea_orm(unique)]
    pub option_name: String,
    #[sea_orm(column_type = "Text")]
    pub option_value: String,
    pub autoload: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SiteOption {
    fn from(model: Model) -> Self {
        SiteOption {
            id: model.option_id,
            name: model.option_name,
            value: model.option_value,
            autoload: model.autoload,
        }
    }
}
