//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared catalog handle injected into handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: path parameter checks, body decoding and JSON encoding
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use catalog_infra::read_model::CatalogStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(store: Arc<dyn CatalogStore>) -> Router {
    let services = Arc::new(services::AppServices::new(store));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_trace))
                .layer(Extension(services)),
        )
}
