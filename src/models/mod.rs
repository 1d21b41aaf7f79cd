pub mod customer;

pub use customer::{Customer, CustomerCreate, CustomerUpdate};
