use crate::models::{Customer, CustomerCreate, CustomerUpdate};
use utoipa::OpenApi;
use utoipa::openapi::server::Server;

/// Path of the interactive documentation.
pub const DOCS_PATH: &str = "/api-docs";
/// Path of the raw OpenAPI document.
pub const SPEC_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customers API",
        version = "1.0.0",
        description = "API for managing Northwind customers"
    ),
    components(schemas(Customer, CustomerCreate, CustomerUpdate)),
    tags((name = "Customers", description = "Customer management"))
)]
pub struct ApiDoc;

/// Base document with the local server entry; operations are merged in by the router.
pub fn base_document(port: u16) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(format!("http://localhost:{port}"))]);
    doc
}
