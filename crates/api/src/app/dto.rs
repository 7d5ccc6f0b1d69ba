use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use catalog_core::ProductId;

use crate::app::errors::ApiError;

// -------------------------
// Response DTOs
// -------------------------

/// Error envelope shared by every failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub products: usize,
    pub checked_at: String,
}

// -------------------------
// Path parameters
// -------------------------

/// Parse an `{id}` segment (`[0-9]+`).
///
/// Any other shape is a routing miss. A digit string too large for the id
/// type cannot name a stored product, so it is reported as not found.
pub fn parse_product_id(segment: &str) -> Result<ProductId, ApiError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::RouteNotFound);
    }
    segment
        .parse::<i64>()
        .map(ProductId::new)
        .map_err(|_| ApiError::IdOutOfRange(segment.to_string()))
}

/// Check a `{sku}` segment (`[A-Za-z0-9]+`).
pub fn check_sku_code(segment: &str) -> Result<&str, ApiError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ApiError::RouteNotFound);
    }
    Ok(segment)
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Decode a request body regardless of its declared content type.
///
/// A bare `null` body decodes to the record's zero value.
pub fn decode_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(ApiError::MalformedBody)
}

/// Encode `value` as a JSON response with `status`.
pub fn json_response<T: Serialize>(status: StatusCode, value: T) -> Response {
    (status, Json(value)).into_response()
}

/// Echo the accepted request body back verbatim as JSON.
pub fn echo_body(body: Bytes) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}
