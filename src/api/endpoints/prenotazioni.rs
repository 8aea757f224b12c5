//! Prenotazione endpoints under `/api/prenotazioni`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, EntityId, JsonBody, RequestMeta};
use crate::dto::{PrenotazioneCreateDto, PrenotazioneDto, PrenotazioneUpdateDto};
use crate::services::PrenotazioneService;

pub async fn create(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    JsonBody(dto): JsonBody<PrenotazioneCreateDto>,
) -> Result<(StatusCode, Json<PrenotazioneDto>), ApiError> {
    let conn = ctx.connection(&meta)?;
    let created = PrenotazioneService::new(&conn).create(dto).map_err(|e| meta.reject(e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<Json<Vec<PrenotazioneDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let prenotazioni = PrenotazioneService::new(&conn).list_active().map_err(|e| meta.reject(e))?;
    Ok(Json(prenotazioni))
}

pub async fn list_deleted(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<Json<Vec<PrenotazioneDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let prenotazioni = PrenotazioneService::new(&conn)
        .list_deleted()
        .map_err(|e| meta.reject(e))?;
    Ok(Json(prenotazioni))
}

pub async fn get(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<Json<PrenotazioneDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let prenotazione = PrenotazioneService::new(&conn)
        .get_active(id)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(prenotazione))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
    JsonBody(dto): JsonBody<PrenotazioneUpdateDto>,
) -> Result<Json<PrenotazioneDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let prenotazione = PrenotazioneService::new(&conn)
        .update(id, dto)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(prenotazione))
}

pub async fn soft_delete(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    PrenotazioneService::new(&conn).soft_delete(id).map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn restore(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    PrenotazioneService::new(&conn).restore(id).map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn soft_delete_all(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    PrenotazioneService::new(&conn).soft_delete_all().map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn restore_all(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    PrenotazioneService::new(&conn).restore_all().map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/prenotazioni/by-medico/:id`: ordered by date and time.
pub async fn by_medico(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(medico_id): EntityId,
) -> Result<Json<Vec<PrenotazioneDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let prenotazioni = PrenotazioneService::new(&conn)
        .list_by_medico_id(medico_id)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(prenotazioni))
}

pub async fn by_paziente(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(paziente_id): EntityId,
) -> Result<Json<Vec<PrenotazioneDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let prenotazioni = PrenotazioneService::new(&conn)
        .list_by_paziente_id(paziente_id)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(prenotazioni))
}
