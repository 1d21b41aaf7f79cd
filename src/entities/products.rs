use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Products")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ProductID")]
    pub product_id: i32,
    #[sea_orm(column_name = "ProductName", column_type = "String(StringLen::N(40))")]
    pub product_name: String,
    #[sea_orm(column_name = "SupplierID")]
    pub supplier_id: Option<i32>,
    #[sea_orm(column_name = "CategoryID")]
    pub category_id: Option<i32>,
    #[sea_orm(column_name = "QuantityPerUnit", column_type = "String(StringLen::N(20))")]
    pub quantity_per_unit: Option<String>,
    #[sea_orm(column_name = "UnitPrice", column_type = "Decimal(Some((19, 4)))")]
    pub unit_price: Option<Decimal>,
    #[sea_orm(column_name = "UnitsInStock")]
    pub units_in_stock: Option<i16>,
    #[sea_orm(column_name = "UnitsOnOrder")]
    pub units_on_order: Option<i16>,
    #[sea_orm(column_name = "ReorderLevel")]
    pub reorder_level: Option<i16>,
    #[sea_orm(column_name = "Discontinued")]
    pub discontinued: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::suppliers::Entity",
        from = "Column::SupplierId",
        to = "super::suppliers::Column::SupplierId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Suppliers,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::CategoryId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Categories,
    #[sea_orm(has_many = "super::order_details::Entity")]
    OrderDetails,
}

impl Related<super::suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suppliers.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::order_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetails.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_details::Relation::Orders.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_details::Relation::Products.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
