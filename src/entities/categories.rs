use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Categories")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "CategoryID")]
    pub category_id: i32,
    #[sea_orm(column_name = "CategoryName", column_type = "String(StringLen::N(15))")]
    pub category_name: String,
    #[sea_orm(column_name = "Description", column_type = "Text")]
    pub description: Option<String>,
    #[sea_orm(column_name = "Picture")]
    pub picture: Option<Vec<u8>>,
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
