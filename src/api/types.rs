//! Shared types and extractors for the API layer.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequest, FromRequestParts, OriginalUri, Path, Query, Request};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::request::Parts;
use axum::http::{HeaderMap, Uri};
use axum::Json;
use rusqlite::Connection;
use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, ApiErrorKind};
use crate::core_state::CoreState;
use crate::messages::{self, Language, MessageKey};

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }

    /// Open the connection a request's services run on.
    pub fn connection(&self, meta: &RequestMeta) -> Result<Connection, ApiError> {
        self.core.open_db().map_err(|e| meta.reject(e))
    }
}

/// Request facts an error response needs: the full path and the language
/// negotiated from `Accept-Language`.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    pub path: String,
    pub language: Language,
}

impl RequestMeta {
    fn from_request_head(
        uri: &Uri,
        original: Option<&OriginalUri>,
        headers: &HeaderMap,
        ctx: &ApiContext,
    ) -> Self {
        // Nested routers see the path without their prefix.
        let path = original.map(|o| o.0.path()).unwrap_or(uri.path()).to_string();
        let accept = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
        Self {
            path,
            language: Language::from_accept_language(accept, ctx.core.default_language()),
        }
    }

    pub fn reject(&self, kind: impl Into<ApiErrorKind>) -> ApiError {
        ApiError::new(kind, self.path.clone(), self.language)
    }

    pub fn bad_request(&self, key: MessageKey, detail: impl Into<String>) -> ApiError {
        self.reject(ApiErrorKind::BadRequest {
            key,
            detail: detail.into(),
        })
    }
}

#[axum::async_trait]
impl FromRequestParts<ApiContext> for RequestMeta {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &ApiContext,
    ) -> Result<Self, Self::Rejection> {
        Ok(RequestMeta::from_request_head(
            &parts.uri,
            parts.extensions.get::<OriginalUri>(),
            &parts.headers,
            ctx,
        ))
    }
}

/// The route's single path parameter as text. Undecodable segments are a 400.
#[derive(Debug, Clone)]
pub struct PathText(pub String);

#[axum::async_trait]
impl FromRequestParts<ApiContext> for PathText {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &ApiContext,
    ) -> Result<Self, Self::Rejection> {
        let meta = RequestMeta::from_request_head(
            &parts.uri,
            parts.extensions.get::<OriginalUri>(),
            &parts.headers,
            ctx,
        );
        match Path::<String>::from_request_parts(parts, ctx).await {
            Ok(Path(raw)) => Ok(PathText(raw)),
            Err(rejection) => Err(meta.bad_request(messages::MALFORMED_PATH, rejection.body_text())),
        }
    }
}

/// Numeric entity id taken from the route's single path parameter.
/// Anything that is not an integer is a 400.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i64);

#[axum::async_trait]
impl FromRequestParts<ApiContext> for EntityId {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &ApiContext,
    ) -> Result<Self, Self::Rejection> {
        let meta = RequestMeta::from_request_head(
            &parts.uri,
            parts.extensions.get::<OriginalUri>(),
            &parts.headers,
            ctx,
        );
        let Path(raw) = Path::<String>::from_request_parts(parts, ctx)
            .await
            .map_err(|rejection| meta.bad_request(messages::INVALID_ID, rejection.body_text()))?;
        raw.trim()
            .parse::<i64>()
            .map(EntityId)
            .map_err(|_| meta.bad_request(messages::INVALID_ID, raw))
    }
}

/// JSON body whose parse failures render as a localized 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T> FromRequest<ApiContext> for JsonBody<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, ctx: &ApiContext) -> Result<Self, Self::Rejection> {
        let meta = RequestMeta::from_request_head(
            req.uri(),
            req.extensions().get::<OriginalUri>(),
            req.headers(),
            ctx,
        );
        match Json::<T>::from_request(req, ctx).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(meta.bad_request(messages::MALFORMED_BODY, rejection.body_text())),
        }
    }
}

/// Query string whose parse failures render as a localized 400.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

#[axum::async_trait]
impl<T> FromRequestParts<ApiContext> for QueryParams<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &ApiContext,
    ) -> Result<Self, Self::Rejection> {
        let meta = RequestMeta::from_request_head(
            &parts.uri,
            parts.extensions.get::<OriginalUri>(),
            &parts.headers,
            ctx,
        );
        match Query::<T>::from_request_parts(parts, ctx).await {
            Ok(Query(value)) => Ok(QueryParams(value)),
            Err(rejection) => Err(meta.bad_request(messages::MALFORMED_QUERY, rejection.body_text())),
        }
    }
}
