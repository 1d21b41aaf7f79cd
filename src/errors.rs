//! # Error Handling for the Customers API
//!
//! Every handler returns [`ApiError`] on failure. The error knows its HTTP status,
//! renders a short plain-text message for the client, and logs whatever internal
//! detail it carries through `tracing` before the response leaves the process.
//!
//! Database errors, constraint names and driver messages are never sent to clients.
//!
//! ```rust,ignore
//! async fn handler(State(db): State<DatabaseConnection>) -> Result<Json<Customer>, ApiError> {
//!     let model = customers::Entity::find_by_id(id)
//!         .one(&db)
//!         .await
//!         .map_err(ApiError::database)?
//!         .ok_or_else(|| ApiError::not_found("Customer"))?;
//!     Ok(Json(model.into()))
//! }
//! ```

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use std::fmt;

/// API error type with automatic logging and sanitized plain-text responses.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found - the addressed resource doesn't exist
    NotFound {
        /// Resource type (e.g. "Customer")
        resource: String,
    },

    /// 400 Bad Request - client data rejected before or by the database
    BadRequest {
        /// Internal reason (logged, not sent to user)
        internal: Option<String>,
    },

    /// 500 Internal Server Error - database error (details logged, not exposed)
    Database {
        /// Internal error (logged, not sent to user)
        internal: DbErr,
    },
}

impl ApiError {
    /// Create a 404 Not Found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a 400 Bad Request error.
    ///
    /// `reason` is logged but the client only ever sees `Bad Request`.
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest {
            internal: Some(reason.into()),
        }
    }

    /// Create a 500 Internal Server Error from a database error
    pub fn database(err: DbErr) -> Self {
        Self::Database { internal: err }
    }

    /// Classify an error raised while writing client-supplied data.
    ///
    /// Writes fail because of what the client sent (constraint violations, bad
    /// values, custom merge errors) far more often than anything else, so every
    /// failure except a missing row becomes a 400.
    ///
    /// A row deleted between lookup and write surfaces as `RecordNotUpdated` and
    /// is reported as a 404 like any other missing row.
    pub fn from_write(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => Self::not_found(resource_from_message(&msg)),
            DbErr::RecordNotUpdated => Self::not_found("Resource"),
            other => Self::BadRequest {
                internal: Some(other.to_string()),
            },
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message (sanitized)
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource } => format!("{resource} not found"),
            Self::BadRequest { .. } => "Bad Request".to_string(),
            Self::Database { .. } => "Internal Server Error".to_string(),
        }
    }

    fn log_internal(&self) {
        match self {
            Self::Database { internal } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            Self::BadRequest {
                internal: Some(details),
            } => {
                tracing::warn!(details = %details, "Request rejected");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.user_message(),
        )
            .into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

/// Convert SeaORM `DbErr` to `ApiError`
///
/// - `DbErr::RecordNotFound` → 404 Not Found
/// - everything else → 500 Internal Server Error (logged, sanitized)
///
/// Write paths that should answer 400 use [`ApiError::from_write`] instead.
impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => Self::not_found(resource_from_message(&msg)),
            other => Self::Database { internal: other },
        }
    }
}

// Repository errors read "<Resource> not found"
fn resource_from_message(msg: &str) -> String {
    msg.split_whitespace()
        .next()
        .unwrap_or("Resource")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let err = ApiError::not_found("Customer");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "Customer not found");
    }

    #[test]
    fn test_bad_request_hides_reason() {
        let err = ApiError::bad_request("companyName exceeds 40 characters");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Bad Request");
        assert_eq!(err.to_string(), "Bad Request");
    }

    #[test]
    fn test_database_error_is_sanitized() {
        let err = ApiError::database(DbErr::Custom("connection refused at 10.0.0.5".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "Internal Server Error");
    }

    #[test]
    fn test_from_db_err_record_not_found() {
        let err: ApiError = DbErr::RecordNotFound("Customer not found".into()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "Customer not found");
    }

    #[test]
    fn test_from_db_err_other_is_500() {
        let err: ApiError = DbErr::Custom("boom".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_write_maps_failures_to_400() {
        let err = ApiError::from_write(DbErr::Custom("companyName cannot be null".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::from_write(DbErr::RecordNotFound("Customer not found".into()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_from_write_row_vanished_before_update_is_404() {
        let err = ApiError::from_write(DbErr::RecordNotUpdated);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "Resource not found");
    }

    #[tokio::test]
    async fn test_into_response_is_plain_text() {
        let response = ApiError::not_found("Customer").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Customer not found");
    }
}
