use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Suppliers")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "SupplierID")]
    pub supplier_id: i32,
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
    #[sea_orm(column_name = "HomePage", column_type = "Text")]
    pub home_page: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
