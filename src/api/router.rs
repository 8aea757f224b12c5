//! API router.
//!
//! Returns a composable `Router` with every route nested under `/api/`.
//!
//! Layers (outermost first): Cache-Control → CORS → Trace → Audit → Handler.

use std::sync::Arc;

use axum::http::header::{ACCEPT_LANGUAGE, CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints::{health, medici, pazienti, prenotazioni, segretari};
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router over shared state.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    // Static segments win over `:id`, so `/medici/deleted` never reaches `get`.
    let api = Router::new()
        .route("/health", get(health::check))
        .merge(medici_routes())
        .merge(segretari_routes())
        .merge(pazienti_routes())
        .merge(prenotazioni_routes())
        .with_state(ctx);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE, ACCEPT_LANGUAGE]);

    Router::new()
        .nest("/api", api)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

fn medici_routes() -> Router<ApiContext> {
    Router::new()
        .route(
            "/medici",
            post(medici::create)
                .get(medici::list)
                .delete(medici::soft_delete_all),
        )
        .route("/medici/deleted", get(medici::list_deleted))
        .route("/medici/restore", post(medici::restore_all))
        .route("/medici/by-email", get(medici::by_email))
        .route("/medici/search", get(medici::search))
        .route("/medici/by-segretario/:id", get(medici::by_segretario))
        .route("/medici/by-paziente/:id", get(medici::by_paziente))
        .route("/medici/by-prenotazione/:id", get(medici::by_prenotazione))
        .route(
            "/medici/:id",
            get(medici::get)
                .patch(medici::update)
                .delete(medici::soft_delete),
        )
        .route("/medici/:id/restore", post(medici::restore))
}

fn segretari_routes() -> Router<ApiContext> {
    Router::new()
        .route(
            "/segretari",
            post(segretari::create)
                .get(segretari::list)
                .delete(segretari::soft_delete_all),
        )
        .route("/segretari/deleted", get(segretari::list_deleted))
        .route("/segretari/restore", post(segretari::restore_all))
        .route("/segretari/by-email", get(segretari::by_email))
        .route("/segretari/search", get(segretari::search))
        .route("/segretari/by-medico/:id", get(segretari::by_medico))
        .route(
            "/segretari/:id",
            get(segretari::get)
                .patch(segretari::update)
                .delete(segretari::soft_delete),
        )
        .route("/segretari/:id/restore", post(segretari::restore))
}

fn pazienti_routes() -> Router<ApiContext> {
    Router::new()
        .route(
            "/pazienti",
            post(pazienti::create)
                .get(pazienti::list)
                .delete(pazienti::soft_delete_all),
        )
        .route("/pazienti/deleted", get(pazienti::list_deleted))
        .route("/pazienti/restore", post(pazienti::restore_all))
        .route("/pazienti/by-email", get(pazienti::by_email))
        .route("/pazienti/search", get(pazienti::search))
        .route("/pazienti/by-medico/:id", get(pazienti::by_medico))
        .route("/pazienti/by-segretario/:id", get(pazienti::by_segretario))
        .route("/pazienti/by-prenotazione/:id", get(pazienti::by_prenotazione))
        .route("/pazienti/by-codice-fiscale/:cf", get(pazienti::by_codice_fiscale))
        .route(
            "/pazienti/:id",
            get(pazienti::get)
                .patch(pazienti::update)
                .delete(pazienti::soft_delete),
        )
        .route("/pazienti/:id/restore", post(pazienti::restore))
}

fn prenotazioni_routes() -> Router<ApiContext> {
    Router::new()
        .route(
            "/prenotazioni",
            post(prenotazioni::create)
                .get(prenotazioni::list)
                .delete(prenotazioni::soft_delete_all),
        )
        .route("/prenotazioni/deleted", get(prenotazioni::list_deleted))
        .route("/prenotazioni/restore", post(prenotazioni::restore_all))
        .route("/prenotazioni/by-medico/:id", get(prenotazioni::by_medico))
        .route("/prenotazioni/by-paziente/:id", get(prenotazioni::by_paziente))
        .route(
            "/prenotazioni/:id",
            get(prenotazioni::get)
                .patch(prenotazioni::update)
                .delete(prenotazioni::soft_delete),
        )
        .route("/prenotazioni/:id/restore", post(prenotazioni::restore))
}
