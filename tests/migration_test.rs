use northwind_api::migration::Migrator;
use sea_orm_migration::{MigratorTrait, SchemaManager};

mod common;
use common::setup_test_db;

const TABLES: [&str; 13] = [
    "Categories",
    "Region",
    "Shippers",
    "Suppliers",
    "CustomerDemographics",
    "Customers",
    "Employees",
    "Territories",
    "Products",
    "Orders",
    "Order Details",
    "EmployeeTerritories",
    "CustomerCustomerDemo",
];

#[tokio::test]
async fn test_up_creates_every_table() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let manager = SchemaManager::new(&db);

    for table in TABLES {
        assert!(manager.has_table(table).await.unwrap(), "missing table {table}");
    }
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_age_column_added_and_reverted() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let manager = SchemaManager::new(&db);

    assert!(manager.has_column("Customers", "age").await.unwrap());

    Migrator::down(&db, Some(1)).await.unwrap();
    assert!(!manager.has_column("Customers", "age").await.unwrap());
    assert!(manager.has_table("Customers").await.unwrap());
    assert_eq!(Migrator::get_pending_migrations(&db).await.unwrap().len(), 1);

    Migrator::up(&db, None).await.unwrap();
    assert!(manager.has_column("Customers", "age").await.unwrap());
}

#[tokio::test]
async fn test_full_rollback_drops_tables() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(!manager.has_table(table).await.unwrap(), "table {table} left behind");
    }
}

#[tokio::test]
async fn test_fresh_rebuilds_schema() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    Migrator::fresh(&db).await.unwrap();

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(manager.has_table(table).await.unwrap(), "missing table {table}");
    }
    assert!(manager.has_column("Customers", "age").await.unwrap());
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
}
