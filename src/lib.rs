pub mod config;
pub mod data_source;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod traits;
pub mod validation;

use axum::{Json, Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub use config::Config;
pub use errors::ApiError;
pub use traits::{CRUDResource, MergeIntoActiveModel};

/// Build the full application: customer routes, API docs and request tracing.
///
/// `port` only feeds the server entry of the published OpenAPI document.
pub fn app(db: &DatabaseConnection, port: u16) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(openapi::base_document(port))
        .merge(handlers::customers::router(db))
        .split_for_parts();

    let spec = api.clone();
    router
        .route(openapi::SPEC_PATH, get(move || async move { Json(spec) }))
        .merge(Scalar::with_url(openapi::DOCS_PATH, api))
        .layer(TraceLayer::new_for_http())
}
