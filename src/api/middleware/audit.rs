//! Request logging middleware.
//!
//! Tags every request with an id, echoes it back as `x-request-id`, and logs
//! method, path, status and latency once the handler has answered.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log API access. Reuses an incoming `x-request-id` when the caller sent one.
pub async fn log_access(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let started = Instant::now();
    let mut response = next.run(req).await;
    let latency_ms = started.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        tracing::warn!(%request_id, %method, path = %path, status, latency_ms, "API request failed");
    } else {
        tracing::info!(%request_id, %method, path = %path, status, latency_ms, "API request");
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
