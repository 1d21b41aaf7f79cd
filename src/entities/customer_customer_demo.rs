//! Pure association between customers and demographic groups; no attributes
//! beyond the two keys.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "CustomerCustomerDemo")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "CustomerID",
        column_type = "Char(Some(5))"
    )]
    pub customer_id: String,
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "CustomerTypeID",
        column_type = "Char(Some(10))"
    )]
    pub customer_type_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::CustomerId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Customers,
    #[sea_orm(
        belongs_to = "super::customer_demographics::Entity",
        from = "Column::CustomerTypeId",
        to = "super::customer_demographics::Column::CustomerTypeId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CustomerDemographics,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl Related<super::customer_demographics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerDemographics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
