//! Generic request handlers shared by every exposed resource.
//!
//! Each handler is a thin translation between HTTP and a [`CRUDResource`] call:
//! extract, call the repository, map the outcome to a status code.

use crate::errors::ApiError;
use crate::traits::CRUDResource;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use sea_orm::DatabaseConnection;
use serde::{Serialize, de::DeserializeOwned};

/// Fetch every row of the resource.
///
/// # Errors
///
/// Any data-access failure becomes a 500.
pub async fn get_all<T>(State(db): State<DatabaseConnection>) -> Result<Json<Vec<T>>, ApiError>
where
    T: CRUDResource + Serialize,
{
    let items = T::get_all(&db).await.map_err(ApiError::database)?;
    tracing::debug!(table = T::TABLE_NAME, count = items.len(), "Fetched {}", T::RESOURCE_NAME_PLURAL);
    Ok(Json(items))
}

/// Fetch one resource by primary key.
///
/// # Errors
///
/// 404 when no row has the key, 500 on any other failure.
pub async fn get_one<T>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<T::KeyType>,
) -> Result<Json<T>, ApiError>
where
    T: CRUDResource + Serialize,
{
    T::get_one(&db, id).await.map(Json).map_err(ApiError::from)
}

/// Create one resource from a JSON body.
///
/// # Errors
///
/// Malformed bodies, failed validation and rejected inserts all become a 400.
pub async fn create_one<T>(
    State(db): State<DatabaseConnection>,
    payload: Result<Json<T::CreateModel>, JsonRejection>,
) -> Result<(StatusCode, Json<T>), ApiError>
where
    T: CRUDResource + Serialize,
    T::CreateModel: DeserializeOwned,
{
    let Json(payload) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let created = T::create(&db, payload).await.map_err(ApiError::from_write)?;
    tracing::info!(table = T::TABLE_NAME, "Created {}", T::RESOURCE_NAME_SINGULAR);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Merge a partial JSON body onto an existing resource.
///
/// # Errors
///
/// 404 when the key is unknown, 400 for malformed bodies or rejected writes.
pub async fn update_one<T>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<T::KeyType>,
    payload: Result<Json<T::UpdateModel>, JsonRejection>,
) -> Result<Json<T>, ApiError>
where
    T: CRUDResource + Serialize,
    T::UpdateModel: DeserializeOwned,
{
    let Json(payload) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let updated = T::update(&db, id.clone(), payload)
        .await
        .map_err(ApiError::from_write)?;
    tracing::info!(table = T::TABLE_NAME, %id, "Updated {}", T::RESOURCE_NAME_SINGULAR);
    Ok(Json(updated))
}

/// Delete one resource by primary key.
///
/// # Errors
///
/// 404 when nothing was deleted, 500 on any other failure.
pub async fn delete_one<T>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<T::KeyType>,
) -> Result<StatusCode, ApiError>
where
    T: CRUDResource,
{
    let deleted = T::delete(&db, id).await.map_err(ApiError::from)?;
    tracing::info!(table = T::TABLE_NAME, id = %deleted, "Deleted {}", T::RESOURCE_NAME_SINGULAR);
    Ok(StatusCode::NO_CONTENT)
}
