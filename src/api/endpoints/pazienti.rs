//! Paziente endpoints under `/api/pazienti`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::{EmailQuery, NameSearchQuery};
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, EntityId, JsonBody, PathText, QueryParams, RequestMeta};
use crate::dto::{PazienteCreateDto, PazienteDto, PazienteUpdateDto};
use crate::messages;
use crate::services::PazienteService;

pub async fn create(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    JsonBody(dto): JsonBody<PazienteCreateDto>,
) -> Result<(StatusCode, Json<PazienteDto>), ApiError> {
    let conn = ctx.connection(&meta)?;
    let created = PazienteService::new(&conn).create(dto).map_err(|e| meta.reject(e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<Json<Vec<PazienteDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let pazienti = PazienteService::new(&conn).list_active().map_err(|e| meta.reject(e))?;
    Ok(Json(pazienti))
}

pub async fn list_deleted(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<Json<Vec<PazienteDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let pazienti = PazienteService::new(&conn).list_deleted().map_err(|e| meta.reject(e))?;
    Ok(Json(pazienti))
}

pub async fn get(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<Json<PazienteDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let paziente = PazienteService::new(&conn).get_active(id).map_err(|e| meta.reject(e))?;
    Ok(Json(paziente))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
    JsonBody(dto): JsonBody<PazienteUpdateDto>,
) -> Result<Json<PazienteDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let paziente = PazienteService::new(&conn)
        .update(id, dto)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(paziente))
}

pub async fn soft_delete(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    PazienteService::new(&conn).soft_delete(id).map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn restore(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    PazienteService::new(&conn).restore(id).map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn soft_delete_all(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    PazienteService::new(&conn).soft_delete_all().map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn restore_all(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
) -> Result<StatusCode, ApiError> {
    let conn = ctx.connection(&meta)?;
    PazienteService::new(&conn).restore_all().map_err(|e| meta.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn by_medico(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(medico_id): EntityId,
) -> Result<Json<Vec<PazienteDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let pazienti = PazienteService::new(&conn)
        .list_by_medico_id(medico_id)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(pazienti))
}

pub async fn by_segretario(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(segretario_id): EntityId,
) -> Result<Json<Vec<PazienteDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let pazienti = PazienteService::new(&conn)
        .list_by_segretario_id(segretario_id)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(pazienti))
}

pub async fn by_prenotazione(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    EntityId(prenotazione_id): EntityId,
) -> Result<Json<PazienteDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let paziente = PazienteService::new(&conn)
        .get_by_prenotazione_id(prenotazione_id)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(paziente))
}

pub async fn by_email(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    QueryParams(query): QueryParams<EmailQuery>,
) -> Result<Json<PazienteDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let paziente = PazienteService::new(&conn)
        .get_by_email(&query.email)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(paziente))
}

/// `GET /api/pazienti/by-codice-fiscale/:cf`: case-insensitive.
pub async fn by_codice_fiscale(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    PathText(codice_fiscale): PathText,
) -> Result<Json<PazienteDto>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let paziente = PazienteService::new(&conn)
        .get_by_codice_fiscale(&codice_fiscale)
        .map_err(|e| meta.reject(e))?;
    Ok(Json(paziente))
}

/// `GET /api/pazienti/search?nome=&cognome=[&medicoId=|&segretarioId=]`
pub async fn search(
    State(ctx): State<ApiContext>,
    meta: RequestMeta,
    QueryParams(query): QueryParams<NameSearchQuery>,
) -> Result<Json<Vec<PazienteDto>>, ApiError> {
    let conn = ctx.connection(&meta)?;
    let service = PazienteService::new(&conn);
    let (nome, cognome) = (query.nome.as_str(), query.cognome.as_str());
    let pazienti = match (query.medico_id, query.segretario_id) {
        (Some(_), Some(_)) => {
            return Err(meta.bad_request(
                messages::MALFORMED_QUERY,
                "medicoId and segretarioId cannot be combined",
            ))
        }
        (Some(medico_id), None) => {
            service.search_by_nome_and_cognome_and_medico_id(nome, cognome, medico_id)
        }
        (None, Some(segretario_id)) => {
            service.search_by_nome_and_cognome_and_segretario_id(nome, cognome, segretario_id)
        }
        (None, None) => service.search_by_nome_and_cognome(nome, cognome),
    }
    .map_err(|e| meta.reject(e))?;
    Ok(Json(pazienti))
}
