//! Medico endpoints under `/api/medici`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::{EmailQuery, NameSearchQuery};
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, EntityId, JsonBody, QueryParams, RequestMeta};
use crate::dto::{MedicoCreateDto, MedicoDto, MedicoUpdateDto};
use crate::messages;
use crate::services::MedicoService;

/// `POST /api/medici`
pub async fn create(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    JsonBody(dto): JsonBody<MedicoCreateDto>,
) -> Result<(StatusCode, Json<MedicoDto>), ApiError> {
    let conn = ctx.connection(&meta)?;
    let created = MedicoService::new(&conn).create(dto).map_err(|e| meta.reject(e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/medici`
pub async fn list(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<Json<Vec<MedicoDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let medici = MedicoService::new(&conn).list_active().map_err(|e| meta.reject(e))?;
    Ok(Json(medici))
}

/// `GET /api/medici/deleted`
pub async fn list_deleted(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<Json<Vec<MedicoDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let medici = MedicoService::new(&conn).list_deleted().map_err(|e| meta.reject(e))?;
    Ok(Json(medici))
}

/// `GET /api/medici/:id`
pub async fn get(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<Json<MedicoDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let medico = MedicoService::new(&conn).get_active(id).map_err(|e| meta.reject(e))?;
    Ok(Json(medico))
}

/// `PATCH /api/medici/:id`
pub async fn update(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
    JsonBody(dto): JsonBody<MedicoUpdateDto>,
) -> Result<Json<MedicoDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let medico = MedicoService::new(&conn).update(id, dto).map_err(|e| meta.reject(e))?;
    Ok(Json(medico))
}

/// `DELETE /api/medici/:id`
pub async fn soft_delete(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    MedicoService::new(&conn).soft_delete(id).map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/medici/:id/restore`
pub async fn restore(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    MedicoService::new(&conn).restore(id).map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/medici`
pub async fn soft_delete_all(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    MedicoService::new(&conn).soft_delete_all().map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/medici/restore`
pub async fn restore_all(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    MedicoService::new(&conn).restore_all().map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/medici/by-segretario/:id`
pub async fn by_segretario(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(segretario_id): EntityId,
) -> Result<Json<MedicoDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let medico = MedicoService::new(&conn)
        .get_by_segretario_id(segretario_id)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(medico))
}

/// `GET /api/medici/by-paziente/:id`
pub async fn by_paziente(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(paziente_id): EntityId,
) -> Result<Json<MedicoDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let medico = MedicoService::new(&conn)
        .get_by_paziente_id(paziente_id)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(medico))
}

/// `GET /api/medici/by-prenotazione/:id`
pub async fn by_prenotazione(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(prenotazione_id): EntityId,
) -> Result<Json<MedicoDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let medico = MedicoService::new(&conn)
        .get_by_prenotazione_id(prenotazione_id)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(medico))
}

/// `GET /api/medici/by-email?email=`
pub async fn by_email(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    QueryParams(query): QueryParams<EmailQuery>,
) -> Result<Json<MedicoDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let medico = MedicoService::new(&conn)
        .get_by_email(&query.email)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(medico))
}

/// `GET /api/medici/search?nome=&cognome=`; owner filters are rejected.
pub async fn search(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    QueryParams(query): QueryParams<NameSearchQuery>,
) -> Result<Json<Vec<MedicoDto>>, ApiError> {
    if query.medico_id.is_some() || query.segretario_id.is_some() {
        return Err(meta.bad_request(
            messages::MALFORMED_QUERY,
            "medicoId and segretarioId are not accepted for medici",
        ));
    }
    let conn = ctx.connection(&meta)?;
    let medici = MedicoService::new(&conn)
        .search_by_nome_and_cognome(&query.nome, &query.cognome)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(medici))
}
