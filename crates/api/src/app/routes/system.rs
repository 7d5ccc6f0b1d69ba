use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::Response};
use chrono::Utc;

use crate::app::dto::{self, HealthResponse};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let payload = HealthResponse {
        status: "ok",
        products: services.catalog().len(),
        checked_at: Utc::now().to_rfc3339(),
    };
    dto::json_response(StatusCode::OK, payload)
}

/// Fallback for requests no route matched.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
