//! Versioned schema changes, applied with the `migrate` binary.

use sea_orm_migration::prelude::*;

mod m20230101_000001_create_northwind_tables;
mod m20230328_000002_add_age_to_customers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230101_000001_create_northwind_tables::Migration),
            Box::new(m20230328_000002_add_age_to_customers::Migration),
        ]
    }
}
