use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "EmployeeTerritories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "EmployeeID")]
    pub employee_id: i32,
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "TerritoryID",
        column_type = "String(StringLen::N(20))"
    )]
    pub territory_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::EmployeeId",
        to = "super::employees::Column::EmployeeId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Employees,
    #[sea_orm(
        belongs_to = "super::territories::Entity",
        from = "Column::TerritoryId",
        to = "super::territories::Column::TerritoryId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Territories,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::territories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Territories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
