use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "CustomerDemographics")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "CustomerTypeID",
        column_type = "Char(Some(10))"
    )]
    pub customer_type_id: String,
    #[sea_orm(column_name = "CustomerDesc", column_type = "Text")]
    pub customer_desc: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::customer_customer_demo::Entity")]
    CustomerCustomerDemo,
}

impl Related<super::customer_customer_demo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerCustomerDemo.def()
    }
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        super::customer_customer_demo::Relation::Customers.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::customer_customer_demo::Relation::CustomerDemographics.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
