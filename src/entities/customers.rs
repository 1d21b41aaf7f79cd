use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Customers")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "CustomerID",
        column_type = "Char(Some(5))"
    )]
    pub customer_id: String,
    #[sea_orm(column_name = "CompanyName", column_type = "String(StringLen::N(40))")]
    pub company_name: String,
    #[sea_orm(column_name = "ContactName", column_type = "String(StringLen::N(30))")]
    pub contact_name: Option<String>,
    #[sea_orm(column_name = "ContactTitle", column_type = "String(StringLen::N(30))")]
    pub contact_title: Option<String>,
    #[sea_orm(column_name = "Address", column_type = "String(StringLen::N(60))")]
    pub address: Option<String>,
    #[sea_orm(column_name = "City", column_type = "String(StringLen::N(15))")]
    pub city: Option<String>,
    #[sea_orm(column_name = "Region", column_type = "String(StringLen::N(15))")]
    pub region: Option<String>,
    #[sea_orm(column_name = "PostalCode", column_type = "String(StringLen::N(10))")]
    pub postal_code: Option<String>,
    #[sea_orm(column_name = "Country", column_type = "String(StringLen::N(15))")]
    pub country: Option<String>,
    #[sea_orm(column_name = "Phone", column_type = "String(StringLen::N(24))")]
    pub phone: Option<String>,
    #[sea_orm(column_name = "Fax", column_type = "String(StringLen::N(24))")]
    pub fax: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
    #[sea_orm(has_many = "super::customer_customer_demo::Entity")]
    CustomerCustomerDemo,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::customer_customer_demo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerCustomerDemo.def()
    }
}

// Many-to-many through the CustomerCustomerDemo association table
impl Related<super::customer_demographics::Entity> for Entity {
    fn to() -> RelationDef {
        super::customer_customer_demo::Relation::CustomerDemographics.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::customer_customer_demo::Relation::Customers.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
