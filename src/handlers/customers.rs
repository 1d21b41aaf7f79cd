//! `/customers` endpoints.
//!
//! Thin annotated wrappers around the generic handlers in [`crate::routes`]; the
//! `utoipa::path` attributes here are the source of the published API contract.

use crate::errors::ApiError;
use crate::models::{Customer, CustomerCreate, CustomerUpdate};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use sea_orm::DatabaseConnection;
use utoipa_axum::{router::OpenApiRouter, routes};

#[utoipa::path(
    get,
    path = "/customers",
    tag = "Customers",
    summary = "List all customers",
    responses(
        (status = 200, description = "Every customer in the table", body = [Customer]),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    )
)]
pub async fn list_customers(
    state: State<DatabaseConnection>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    crate::routes::get_all::<Customer>(state).await
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "Customers",
    summary = "Get a customer by ID",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "The requested customer", body = Customer),
        (status = 404, description = "Customer not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    )
)]
pub async fn get_customer(
    state: State<DatabaseConnection>,
    id: Path<String>,
) -> Result<Json<Customer>, ApiError> {
    crate::routes::get_one::<Customer>(state, id).await
}

#[utoipa::path(
    post,
    path = "/customers",
    tag = "Customers",
    summary = "Create a customer",
    request_body = CustomerCreate,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Bad Request", body = String, content_type = "text/plain")
    )
)]
pub async fn create_customer(
    state: State<DatabaseConnection>,
    payload: Result<Json<CustomerCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    crate::routes::create_one::<Customer>(state, payload).await
}

#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "Customers",
    summary = "Update a customer",
    description = "Fields present in the body overwrite the stored values; absent fields are left untouched.",
    params(("id" = String, Path, description = "Customer ID")),
    request_body = CustomerUpdate,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 404, description = "Customer not found", body = String, content_type = "text/plain"),
        (status = 400, description = "Bad Request", body = String, content_type = "text/plain")
    )
)]
pub async fn update_customer(
    state: State<DatabaseConnection>,
    id: Path<String>,
    payload: Result<Json<CustomerUpdate>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    crate::routes::update_one::<Customer>(state, id, payload).await
}

#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "Customers",
    summary = "Delete a customer",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal Server Error", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_customer(
    state: State<DatabaseConnection>,
    id: Path<String>,
) -> Result<StatusCode, ApiError> {
    crate::routes::delete_one::<Customer>(state, id).await
}

pub fn router(db: &DatabaseConnection) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_customers, create_customer))
        .routes(routes!(get_customer, update_customer, delete_customer))
        .with_state(db.clone())
}
