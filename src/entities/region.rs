use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Region")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "RegionID")]
    pub region_id: i32,
    #[sea_orm(column_name = "RegionDescription", column_type = "Char(Some(50))")]
    pub region_description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::territories::Entity")]
    Territories,
}

impl Related<super::territories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Territories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
