use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Territories")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "TerritoryID",
        column_type = "String(StringLen::N(20))"
    )]
    pub territory_id: String,
    #[sea_orm(column_name = "TerritoryDescription", column_type = "Char(Some(50))")]
    pub territory_description: String,
    #[sea_orm(column_name = "RegionID")]
    pub region_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::RegionId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Region,
    #[sea_orm(has_many = "super::employee_territories::Entity")]
    EmployeeTerritories,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::employee_territories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeTerritories.def()
    }
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_territories::Relation::Employees.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_territories::Relation::Territories.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
