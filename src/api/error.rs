//! API error types with structured, localized JSON responses.
//!
//! Every failure leaving the HTTP layer goes through [`ApiError`]. The error
//! carries the request path and the caller's language so the body can be
//! rendered in one place.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use validator::ValidationErrors;

use crate::core_state::CoreError;
use crate::messages::{self, Language, MessageKey};
use crate::services::ServiceError;

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub code: &'static str,
    pub message: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

/// What went wrong, independent of the request it happened in.
#[derive(Debug, thiserror::Error)]
pub enum ApiErrorKind {
    #[error("Not found: {0}")]
    NotFound(MessageKey),
    #[error("Status conflict: {0}")]
    Conflict(MessageKey),
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Invalid request: {detail}")]
    BadRequest { key: MessageKey, detail: String },
    #[error("Integrity violation: {0}")]
    Integrity(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for ApiErrorKind {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(key) => ApiErrorKind::NotFound(key),
            ServiceError::IllegalStatusTransition(key) => ApiErrorKind::Conflict(key),
            ServiceError::Validation(errors) => ApiErrorKind::Validation(errors),
            ServiceError::Database(e) if e.is_integrity_violation() => {
                ApiErrorKind::Integrity(e.to_string())
            }
            ServiceError::Database(e) => ApiErrorKind::Internal(e.to_string()),
        }
    }
}

impl From<CoreError> for ApiErrorKind {
    fn from(err: CoreError) -> Self {
        ApiErrorKind::Internal(err.to_string())
    }
}

/// An [`ApiErrorKind`] bound to the request that produced it.
#[derive(Debug, thiserror::Error)]
#[error("{kind} ({path})")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub path: String,
    pub language: Language,
}

impl ApiError {
    pub fn new(kind: impl Into<ApiErrorKind>, path: impl Into<String>, language: Language) -> Self {
        Self {
            kind: kind.into(),
            path: path.into(),
            language,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let lang = self.language;
        let (status, code, message, errors) = match self.kind {
            ApiErrorKind::NotFound(key) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                messages::resolve(key, lang),
                None,
            ),
            ApiErrorKind::Conflict(key) => (
                StatusCode::CONFLICT,
                "STATUS_CONFLICT",
                messages::resolve(key, lang),
                None,
            ),
            ApiErrorKind::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED",
                messages::resolve(messages::VALIDATION_FAILED, lang),
                Some(field_messages(&errors, lang)),
            ),
            ApiErrorKind::BadRequest { key, detail } => {
                tracing::debug!(path = %self.path, detail = %detail, "Rejected malformed request");
                (
                    StatusCode::BAD_REQUEST,
                    "BAD_REQUEST",
                    format!("{}: {detail}", messages::resolve(key, lang)),
                    None,
                )
            }
            ApiErrorKind::Integrity(detail) => {
                tracing::error!(path = %self.path, detail = %detail, "Persistence integrity violation");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTEGRITY_VIOLATION",
                    messages::resolve(messages::PERSISTENCE_INTEGRITY, lang),
                    None,
                )
            }
            ApiErrorKind::Internal(detail) => {
                tracing::error!(path = %self.path, detail = %detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    messages::resolve(messages::INTERNAL_ERROR, lang),
                    None,
                )
            }
        };

        let body = ErrorBody {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
            code,
            message,
            path: self.path,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Field name (camelCase, as clients send it) to localized messages.
fn field_messages(errors: &ValidationErrors, lang: Language) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let resolved = errs
                .iter()
                .map(|e| messages::resolve(&e.code, lang))
                .collect();
            (camel_case(field), resolved)
        })
        .collect()
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
