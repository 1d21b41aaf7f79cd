use crate::entities::customers;
use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &'static str {
        "m20230328_000002_add_age_to_customers"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(customers::Entity)
                    .add_column(ColumnDef::new(Customers::Age).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(customers::Entity)
                    .drop_column(Customers::Age)
                    .to_owned(),
            )
            .await
    }
}

// Not mapped on the entity; the API does not expose it.
#[derive(DeriveIden)]
enum Customers {
    Age,
}
