use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_telefono;
use crate::models::{Medico, RecordStatus};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MedicoCreateDto {
    #[validate(length(min = 1, max = 50, code = "validation.nome.length"))]
    pub nome: String,
    #[validate(length(min = 1, max = 50, code = "validation.cognome.length"))]
    pub cognome: String,
    #[validate(custom = "validate_telefono")]
    pub telefono: String,
    #[validate(email(code = "validation.email.format"))]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicoDto {
    pub id: i64,
    pub nome: String,
    pub cognome: String,
    pub telefono: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MedicoUpdateDto {
    #[validate(length(min = 1, max = 50, code = "validation.nome.length"))]
    pub nome: Option<String>,
    #[validate(length(min = 1, max = 50, code = "validation.cognome.length"))]
    pub cognome: Option<String>,
    #[validate(custom = "validate_telefono")]
    pub telefono: Option<String>,
    #[validate(email(code = "validation.email.format"))]
    pub email: Option<String>,
}

impl From<MedicoCreateDto> for Medico {
    fn from(dto: MedicoCreateDto) -> Self {
        Medico {
            id: 0,
            nome: dto.nome,
            cognome: dto.cognome,
            telefono: dto.telefono,
            email: dto.email,
            record_status: RecordStatus::default(),
        }
    }
}

impl From<Medico> for MedicoDto {
    fn from(medico: Medico) -> Self {
        MedicoDto {
            id: medico.id,
            nome: medico.nome,
            cognome: medico.cognome,
            telefono: medico.telefono,
            email: medico.email,
        }
    }
}
