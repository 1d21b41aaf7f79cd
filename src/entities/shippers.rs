use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Shippers")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ShipperID")]
    pub shipper_id: i32,
    #[sea_orm(column_name = "CompanyName", column_type = "String(StringLen::N(40))")]
    pub company_name: String,
    #[sea_orm(column_name = "Phone", column_type = "String(StringLen::N(24))")]
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
