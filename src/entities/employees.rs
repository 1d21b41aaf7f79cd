use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Employees")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "EmployeeID")]
    pub employee_id: i32,
    #[sea_orm(column_name = "LastName", column_type = "String(StringLen::N(20))")]
    pub last_name: String,
    #[sea_orm(column_name = "FirstName", column_type = "String(StringLen::N(10))")]
    pub first_name: String,
    #[sea_orm(column_name = "Title", column_type = "String(StringLen::N(30))")]
    pub title: Option<String>,
    #[sea_orm(column_name = "TitleOfCourtesy", column_type = "String(StringLen::N(25))")]
    pub title_of_courtesy: Option<String>,
    #[sea_orm(column_name = "BirthDate")]
    pub birth_date: Option<DateTime>,
    #[sea_orm(column_name = "HireDate")]
    pub hire_date: Option<DateTime>,
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
    #[sea_orm(column_name = "HomePhone", column_type = "String(StringLen::N(24))")]
    pub home_phone: Option<String>,
    #[sea_orm(column_name = "Extension", column_type = "String(StringLen::N(4))")]
    pub extension: Option<String>,
    #[sea_orm(column_name = "Photo")]
    pub photo: Option<Vec<u8>>,
    #[sea_orm(column_name = "Notes", column_type = "Text")]
    pub notes: Option<String>,
    #[sea_orm(column_name = "ReportsTo")]
    pub reports_to: Option<i32>,
    #[sea_orm(column_name = "PhotoPath", column_type = "String(StringLen::N(255))")]
    pub photo_path: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ReportsTo",
        to = "Column::EmployeeId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Manager,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
    #[sea_orm(has_many = "super::employee_territories::Entity")]
    EmployeeTerritories,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::employee_territories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeTerritories.def()
    }
}

impl Related<super::territories::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_territories::Relation::Territories.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_territories::Relation::Employees.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
