use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use catalog_core::CatalogError;

use crate::app::dto::ErrorBody;

/// Wire message for any product or sku miss.
pub const NOT_FOUND_MESSAGE: &str = "Product Id not found!";

/// Failures surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Request body did not decode into the expected record.
    #[error("malformed request body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// Digit-only id segment that overflows the id type; no product can carry it.
    #[error("product id {0} out of range")]
    IdOutOfRange(String),

    /// Path segment failed the route's character-class constraint.
    #[error("route not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Catalog(CatalogError::NotFound(_)) | ApiError::IdOutOfRange(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Message placed in the JSON envelope.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Catalog(CatalogError::NotFound(_)) | ApiError::IdOutOfRange(_) => {
                NOT_FOUND_MESSAGE.to_string()
            }
            ApiError::MalformedBody(e) => e.to_string(),
            ApiError::RouteNotFound => "route not found".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Catalog(CatalogError::NotFound(missing)) => {
                tracing::warn!(%missing, "catalog lookup missed");
            }
            ApiError::IdOutOfRange(segment) => {
                tracing::warn!(id = %segment, "product id out of range")
            }
            ApiError::MalformedBody(e) => tracing::warn!(error = %e, "rejected request body"),
            ApiError::RouteNotFound => tracing::debug!("no route matched"),
        }
        json_error(self.status(), self.public_message())
    }
}

/// Build a `{"error": true, "message": ...}` response.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}
