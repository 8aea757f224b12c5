use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{validate_codice_fiscale, validate_telefono};
use crate::models::{Paziente, RecordStatus};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PazienteCreateDto {
    #[validate(length(min = 1, max = 50, code = "validation.nome.length"))]
    pub nome: String,
    #[validate(length(min = 1, max = 50, code = "validation.cognome.length"))]
    pub cognome: String,
    #[validate(custom = "validate_telefono")]
    pub telefono: String,
    #[validate(email(code = "validation.email.format"))]
    pub email: String,
    #[validate(custom = "validate_codice_fiscale")]
    pub codice_fiscale: String,
    pub medico_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PazienteDto {
    pub id: i64,
    pub nome: String,
    pub cognome: String,
    pub telefono: String,
    pub email: String,
    pub codice_fiscale: String,
    pub medico_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PazienteUpdateDto {
    #[validate(length(min = 1, max = 50, code = "validation.nome.length"))]
    pub nome: Option<String>,
    #[validate(length(min = 1, max = 50, code = "validation.cognome.length"))]
    pub cognome: Option<String>,
    #[validate(custom = "validate_telefono")]
    pub telefono: Option<String>,
    #[validate(email(code = "validation.email.format"))]
    pub email: Option<String>,
    #[validate(custom = "validate_codice_fiscale")]
    pub codice_fiscale: Option<String>,
    pub medico_id: Option<i64>,
}

impl From<PazienteCreateDto> for Paziente {
    fn from(dto: PazienteCreateDto) -> Self {
        Paziente {
            id: 0,
            nome: dto.nome,
            cognome: dto.cognome,
            telefono: dto.telefono,
            email: dto.email,
            codice_fiscale: dto.codice_fiscale,
            medico_id: dto.medico_id,
            record_status: RecordStatus::default(),
        }
    }
}

impl From<Paziente> for PazienteDto {
    fn from(paziente: Paziente) -> Self {
        PazienteDto {
            id: paziente.id,
            nome: paziente.nome,
            cognome: paziente.cognome,
            telefono: paziente.telefono,
            email: paziente.email,
            codice_fiscale: paziente.codice_fiscale,
            medico_id: paziente.medico_id,
        }
    }
}
