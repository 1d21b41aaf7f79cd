//! Sea-ORM mappings of the Northwind tables.
//!
//! Table and column names follow the Northwind schema verbatim (`CustomerID`,
//! `Order Details`, ...); Rust field names are snake case.

pub mod categories;
pub mod customer_customer_demo;
pub mod customer_demographics;
pub mod customers;
pub mod employee_territories;
pub mod employees;
pub mod order_details;
pub mod orders;
pub mod products;
pub mod region;
pub mod shippers;
pub mod suppliers;
pub mod territories;
