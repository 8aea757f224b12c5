//! API endpoint handlers, one module per entity family.
//!
//! Handlers open a connection for the request, build the service over it
//! and translate service failures through the request's [`RequestMeta`].
//!
//! [`RequestMeta`]: crate::api::types::RequestMeta

pub mod health;
pub mod medici;
pub mod pazienti;
pub mod prenotazioni;
pub mod segretari;

use serde::Deserialize;

/// `?email=`
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// `?nome=&cognome=` plus the optional owner filters some families accept.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSearchQuery {
    pub nome: String,
    pub cognome: String,
    pub medico_id: Option<i64>,
    pub segretario_id: Option<i64>,
}
