#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use northwind_api::migration::Migrator;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use serde_json::{Value, json};
use tower::ServiceExt;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

pub fn setup_test_app(db: &DatabaseConnection) -> Router {
    northwind_api::app(db, 3000)
}

pub fn alfki() -> Value {
    json!({
        "customerId": "ALFKI",
        "companyName": "Alfreds Futterkiste",
        "contactName": "Maria Anders",
        "contactTitle": "Sales Representative",
        "address": "Obere Str. 57",
        "city": "Berlin",
        "region": null,
        "postalCode": "12209",
        "country": "Germany",
        "phone": "030-0074321",
        "fax": "030-0076545"
    })
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn create_customer(app: &Router, body: &Value) -> Value {
    let response = send(app, json_request("POST", "/customers", body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
