use crate::entities::{
    categories, customer_customer_demo, customer_demographics, customers, employee_territories,
    employees, order_details, orders, products, region, shippers, suppliers, territories,
};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DbBackend, EntityTrait, Schema};

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &'static str {
        "m20230101_000001_create_northwind_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // Referenced tables before the tables that point at them
        create_table_for(manager, &schema, region::Entity).await?;
        create_table_for(manager, &schema, territories::Entity).await?;
        create_table_for(manager, &schema, employees::Entity).await?;
        create_table_for(manager, &schema, employee_territories::Entity).await?;
        create_table_for(manager, &schema, categories::Entity).await?;
        create_table_for(manager, &schema, suppliers::Entity).await?;
        create_table_for(manager, &schema, products::Entity).await?;
        create_table_for(manager, &schema, shippers::Entity).await?;
        create_table_for(manager, &schema, customers::Entity).await?;
        create_table_for(manager, &schema, customer_demographics::Entity).await?;
        create_table_for(manager, &schema, customer_customer_demo::Entity).await?;
        create_table_for(manager, &schema, orders::Entity).await?;
        create_table_for(manager, &schema, order_details::Entity).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table_for(manager, order_details::Entity).await?;
        drop_table_for(manager, orders::Entity).await?;
        drop_table_for(manager, customer_customer_demo::Entity).await?;
        drop_table_for(manager, customer_demographics::Entity).await?;
        drop_table_for(manager, customers::Entity).await?;
        drop_table_for(manager, shippers::Entity).await?;
        drop_table_for(manager, products::Entity).await?;
        drop_table_for(manager, suppliers::Entity).await?;
        drop_table_for(manager, categories::Entity).await?;
        drop_table_for(manager, employee_territories::Entity).await?;
        drop_table_for(manager, employees::Entity).await?;
        drop_table_for(manager, territories::Entity).await?;
        drop_table_for(manager, region::Entity).await?;
        Ok(())
    }
}

async fn create_table_for<E: EntityTrait>(
    manager: &SchemaManager<'_>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    let mut table = schema.create_table_from_entity(entity);
    if manager.get_database_backend() == DbBackend::Sqlite {
        table = sqlite_money_columns(&table);
    }
    manager.create_table(table.if_not_exists().to_owned()).await
}

/// SQLite stores decimals as `real` and sea-query refuses a precision above 16,
/// so the `Decimal(19, 4)` money columns are created as unsized decimals there.
fn sqlite_money_columns(table: &TableCreateStatement) -> TableCreateStatement {
    let mut rebuilt = Table::create();
    if let Some(name) = table.get_table_name() {
        rebuilt.table(name.clone());
    }
    for column in table.get_columns() {
        let mut column = column.clone();
        if matches!(
            column.get_column_type(),
            Some(ColumnType::Decimal(Some((precision, _)))) if *precision > SQLITE_MAX_DECIMAL_PRECISION
        ) {
            column.decimal();
        }
        rebuilt.col(column);
    }
    for index in table.get_indexes() {
        rebuilt.index(&mut index.clone());
    }
    for foreign_key in table.get_foreign_key_create_stmts() {
        rebuilt.foreign_key(&mut foreign_key.clone());
    }
    rebuilt
}

const SQLITE_MAX_DECIMAL_PRECISION: u32 = 16;

async fn drop_table_for<E: EntityTrait>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr> {
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}
