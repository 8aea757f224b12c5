//! Segretario endpoints under `/api/segretari`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::{EmailQuery, NameSearchQuery};
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, EntityId, JsonBody, QueryParams, RequestMeta};
use crate::dto::{SegretarioCreateDto, SegretarioDto, SegretarioUpdateDto};
use crate::messages;
use crate::services::SegretarioService;

pub async fn create(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    JsonBody(dto): JsonBody<SegretarioCreateDto>,
) -> Result<(StatusCode, Json<SegretarioDto>), ApiError> {
    let conn = ctx.connection(&meta)?;
    let created = SegretarioService::new(&conn).create(dto).map_err(|e| meta.reject(e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<Json<Vec<SegretarioDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let segretari = SegretarioService::new(&conn).list_active().map_err(|e| meta.reject(e))?;
    Ok(Json(segretari))
}

pub async fn list_deleted(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<Json<Vec<SegretarioDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let segretari = SegretarioService::new(&conn).list_deleted().map_err(|e| meta.reject(e))?;
    Ok(Json(segretari))
}

pub async fn get(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<Json<SegretarioDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let segretario = SegretarioService::new(&conn).get_active(id).map_err(|e| meta.reject(e))?;
    Ok(Json(segretario))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
    JsonBody(dto): JsonBody<SegretarioUpdateDto>,
) -> Result<Json<SegretarioDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let segretario = SegretarioService::new(&conn)
        .update(id, dto)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(segretario))
}

pub async fn soft_delete(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    SegretarioService::new(&conn).soft_delete(id).map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn restore(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    SegretarioService::new(&conn).restore(id).map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn soft_delete_all(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    SegretarioService::new(&conn).soft_delete_all().map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn restore_all(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    SegretarioService::new(&conn).restore_all().map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/segretari/by-medico/:id`: ACTIVE secretaries, possibly none.
pub async fn by_medico(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(medico_id): EntityId,
) -> Result<Json<Vec<SegretarioDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let segretari = SegretarioService::new(&conn)
        .list_by_medico_id(medico_id)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(segretari))
}

pub async fn by_email(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    QueryParams(query): QueryParams<EmailQuery>,
) -> Result<Json<SegretarioDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let segretario = SegretarioService::new(&conn)
        .get_by_email(&query.email)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(segretario))
}

/// `GET /api/segretari/search?nome=&cognome=[&medicoId=]`
pub async fn search(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    QueryParams(query): QueryParams<NameSearchQuery>,
) -> Result<Json<Vec<SegretarioDto>>, ApiError> {
    if query.segretario_id.is_some() {
        return Err(meta.bad_request(
            messages::MALFORMED_QUERY,
            "segretarioId is not accepted for segretari",
        ));
    }
    let conn = ctx.connection(&meta)?;
    let service = SegretarioService::new(&conn);
    let segretari = match query.medico_id {
        Some(medico_id) => {
            service.search_by_nome_and_cognome_and_medico_id(&query.nome, &query.cognome, medico_id)
        }
        None => service.search_by_nome_and_cognome(&query.nome, &query.cognome),
    }
    .map_err(|e| meta.reject(e))?;
    Ok(Json(segretari))
}
