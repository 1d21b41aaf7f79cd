use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Orders")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "OrderID")]
    pub order_id: i32,
    #[sea_orm(column_name = "CustomerID", column_type = "Char(Some(5))")]
    pub customer_id: Option<String>,
    #[sea_orm(column_name = "EmployeeID")]
    pub employee_id: Option<i32>,
    #[sea_orm(column_name = "OrderDate")]
    pub order_date: Option<DateTime>,
    #[sea_orm(column_name = "RequiredDate")]
    pub required_date: Option<DateTime>,
    #[sea_orm(column_name = "ShippedDate")]
    pub shipped_date: Option<DateTime>,
    #[sea_orm(column_name = "ShipVia")]
    pub ship_via: Option<i32>,
    #[sea_orm(column_name = "Freight", column_type = "Decimal(Some((19, 4)))")]
    pub freight: Option<Decimal>,
    #[sea_orm(column_name = "ShipName", column_type = "String(StringLen::N(40))")]
    pub ship_name: Option<String>,
    #[sea_orm(column_name = "ShipAddress", column_type = "String(StringLen::N(60))")]
    pub ship_address: Option<String>,
    #[sea_orm(column_name = "ShipCity", column_type = "String(StringLen::N(15))")]
    pub ship_city: Option<String>,
    #[sea_orm(column_name = "ShipRegion", column_type = "String(StringLen::N(15))")]
    pub ship_region: Option<String>,
    #[sea_orm(column_name = "ShipPostalCode", column_type = "String(StringLen::N(10))")]
    pub ship_postal_code: Option<String>,
    #[sea_orm(column_name = "ShipCountry", column_type = "String(StringLen::N(15))")]
    pub ship_country: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::CustomerId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Customers,
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::EmployeeId",
        to = "super::employees::Column::EmployeeId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Employees,
    #[sea_orm(
        belongs_to = "super::shippers::Entity",
        from = "Column::ShipVia",
        to = "super::shippers::Column::ShipperId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Shippers,
    #[sea_orm(has_many = "super::order_details::Entity")]
    OrderDetails,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::shippers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shippers.def()
    }
}

impl Related<super::order_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetails.def()
    }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_details::Relation::Products.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_details::Relation::Orders.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
