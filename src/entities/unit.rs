use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Unit of measure goods are counted in.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "units")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub unit_name: String,
    /// Scale of the unit (for example 12 for "dozen"). Zero is a legal value.
    pub unit_value: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::good::Entity")]
    Goods,
}

impl Related<super::good::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goods.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
