use axum::http::StatusCode;

mod common;
use common::{body_json, body_text, empty_request, send, setup_test_app, setup_test_db};

#[tokio::test]
async fn test_openapi_document_lists_customer_operations() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(&db);

    let response = send(&app, empty_request("GET", "/api-docs/openapi.json")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;

    assert_eq!(doc["info"]["title"], "Customers API");
    assert_eq!(doc["info"]["version"], "1.0.0");
    assert_eq!(doc["servers"][0]["url"], "http://localhost:3000");

    let collection = &doc["paths"]["/customers"];
    assert!(collection["get"].is_object());
    assert!(collection["post"].is_object());

    let item = &doc["paths"]["/customers/{id}"];
    assert!(item["get"].is_object());
    assert!(item["put"].is_object());
    assert!(item["delete"].is_object());
    assert_eq!(item["get"]["tags"][0], "Customers");

    for schema in ["Customer", "CustomerCreate", "CustomerUpdate"] {
        assert!(
            doc["components"]["schemas"][schema].is_object(),
            "missing schema {schema}"
        );
    }
}

#[tokio::test]
async fn test_docs_page_is_served() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let app = setup_test_app(&db);

    let response = send(&app, empty_request("GET", "/api-docs")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Customers API"));
}
