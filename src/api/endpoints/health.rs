//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, RequestMeta};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /api/health`: reports ok once the database can be opened.
pub async fn check(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<Json<HealthResponse>, ApiError> {
    ctx.connection(&meta)?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
    }))
}
