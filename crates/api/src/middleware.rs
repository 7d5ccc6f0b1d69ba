use std::time::Instant;

use axum::{
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use crate::context::RequestContext;

/// Response header echoing the id assigned to the request.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Tag each request with a [`RequestContext`], run the handler inside a span
/// carrying the request id, and log the outcome.
pub async fn request_trace(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let ctx = RequestContext::new();
    let span = tracing::info_span!(
        "request",
        request_id = %ctx.request_id(),
        method = %req.method(),
        path = %req.uri().path(),
    );
    req.extensions_mut().insert(ctx);

    let started = Instant::now();
    let mut res = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            status = res.status().as_u16(),
            latency_us = started.elapsed().as_micros() as u64,
            "request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id().to_string()) {
        res.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }
    res
}
