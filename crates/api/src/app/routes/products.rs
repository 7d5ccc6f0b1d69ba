use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
    routing::{get, put},
    Router,
};

use catalog_products::{Product, Variant};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).put(replace_product))
        .route("/:id/skus/:sku", put(replace_variant))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Response, ApiError> {
    let products = services.catalog().list_all();
    Ok(dto::json_response(StatusCode::OK, products))
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = dto::parse_product_id(&id)?;
    let product = services.catalog().get_by_id(id)?;
    Ok(dto::json_response(StatusCode::OK, product))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let candidate: Product = dto::decode_body(&body)?;
    let created = services.catalog().insert(candidate);
    tracing::info!(product_id = %created.id, skus = created.skus.len(), "product created");
    Ok(dto::json_response(StatusCode::OK, created))
}

/// Whole-record replace. The stored id becomes the body's id, even when it
/// differs from the path. Responds with the request body as sent.
pub async fn replace_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = dto::parse_product_id(&id)?;
    let replacement: Product = dto::decode_body(&body)?;

    let new_id = replacement.id;
    services.catalog().replace_by_id(id, replacement)?;
    if new_id != id {
        tracing::warn!(product_id = %id, new_id = %new_id, "product replaced under a different id");
    }
    tracing::info!(product_id = %id, "product replaced");
    Ok(dto::echo_body(body))
}

/// Responds with the request body as sent.
pub async fn replace_variant(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, sku)): Path<(String, String)>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = dto::parse_product_id(&id)?;
    let sku = dto::check_sku_code(&sku)?;
    let replacement: Variant = dto::decode_body(&body)?;

    services.catalog().replace_variant(id, sku, replacement)?;
    tracing::info!(product_id = %id, sku, "sku replaced");
    Ok(dto::echo_body(body))
}
