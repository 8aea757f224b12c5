//! Localized message catalog.
//!
//! Errors travel through the service layer as stable keys
//! (`error.medico.notFound.exception`, ...). The HTTP boundary resolves
//! them against the caller's language, picked from `Accept-Language`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of a user-facing message, independent of language.
pub type MessageKey = &'static str;

pub const VALIDATION_FAILED: MessageKey = "error.validation.failed";
pub const PERSISTENCE_INTEGRITY: MessageKey = "error.persistence.integrity";
pub const INTERNAL_ERROR: MessageKey = "error.internal";
pub const MALFORMED_BODY: MessageKey = "error.request.body";
pub const INVALID_ID: MessageKey = "error.request.id";
pub const MALFORMED_QUERY: MessageKey = "error.request.query";
pub const MALFORMED_PATH: MessageKey = "error.request.path";

/// Languages the catalog carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    It,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
        }
    }

    /// First supported language named by an `Accept-Language` header value,
    /// in header order. Quality weights are not ranked.
    pub fn from_accept_language(header: Option<&str>, fallback: Language) -> Language {
        header
            .into_iter()
            .flat_map(|h| h.split(','))
            .filter_map(|entry| {
                let tag = entry.split(';').next()?.trim();
                let primary = tag.split(['-', '_']).next()?;
                primary.parse().ok()
            })
            .next()
            .unwrap_or(fallback)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "it" => Ok(Language::It),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// (key, italian, english)
const CATALOG: &[(MessageKey, &str, &str)] = &[
    ("error.medico.notFound.exception", "Medico non trovato", "Doctor not found"),
    ("error.medico.status.deleted.exception", "Il medico è già stato cancellato", "Doctor is already deleted"),
    ("error.medico.status.active.exception", "Il medico è già attivo", "Doctor is already active"),
    ("error.segretario.notFound.exception", "Segretario non trovato", "Secretary not found"),
    ("error.segretario.status.deleted.exception", "Il segretario è già stato cancellato", "Secretary is already deleted"),
    ("error.segretario.status.active.exception", "Il segretario è già attivo", "Secretary is already active"),
    ("error.paziente.notFound.exception", "Paziente non trovato", "Patient not found"),
    ("error.paziente.status.deleted.exception", "Il paziente è già stato cancellato", "Patient is already deleted"),
    ("error.paziente.status.active.exception", "Il paziente è già attivo", "Patient is already active"),
    ("error.prenotazione.notFound.exception", "Prenotazione non trovata", "Appointment not found"),
    ("error.prenotazione.status.deleted.exception", "La prenotazione è già stata cancellata", "Appointment is already deleted"),
    ("error.prenotazione.status.active.exception", "La prenotazione è già attiva", "Appointment is already active"),
    (VALIDATION_FAILED, "Validazione dei campi fallita", "Field validation failed"),
    (PERSISTENCE_INTEGRITY, "Errore di persistenza sul database", "Database persistence statement error"),
    (INTERNAL_ERROR, "Si è verificato un errore interno", "An internal error occurred"),
    (MALFORMED_BODY, "Corpo della richiesta non leggibile", "Request body is not readable"),
    (INVALID_ID, "Identificativo non valido", "Invalid identifier"),
    (MALFORMED_QUERY, "Parametri di ricerca non validi", "Invalid query parameters"),
    (MALFORMED_PATH, "Percorso della richiesta non valido", "Invalid request path"),
    ("validation.nome.length", "Il nome deve avere da 1 a 50 caratteri", "Name must be 1 to 50 characters long"),
    ("validation.cognome.length", "Il cognome deve avere da 1 a 50 caratteri", "Surname must be 1 to 50 characters long"),
    ("validation.telefono.format", "Numero di telefono non valido", "Invalid phone number"),
    ("validation.email.format", "Indirizzo email non valido", "Invalid email address"),
    ("validation.codiceFiscale.format", "Il codice fiscale deve avere 16 caratteri alfanumerici", "Tax code must be 16 alphanumeric characters"),
    ("validation.note.length", "Le note non possono superare 500 caratteri", "Notes cannot exceed 500 characters"),
];

/// Resolve a key for the given language. Unknown keys resolve to themselves.
pub fn resolve(key: &str, language: Language) -> String {
    CATALOG
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, it, en)| match language {
            Language::It => *it,
            Language::En => *en,
        })
        .unwrap_or(key)
        .to_string()
}
