use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_telefono;
use crate::models::{RecordStatus, Segretario};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SegretarioCreateDto {
    #[validate(length(min = 1, max = 50, code = "validation.nome.length"))]
    pub nome: String,
    #[validate(length(min = 1, max = 50, code = "validation.cognome.length"))]
    pub cognome: String,
    #[validate(custom = "validate_telefono")]
    pub telefono: String,
    #[validate(email(code = "validation.email.format"))]
    pub email: String,
    /// Doctor the secretary works for.
    pub medico_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegretarioDto {
    pub id: i64,
    pub nome: String,
    pub cognome: String,
    pub telefono: String,
    pub email: String,
    pub medico_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SegretarioUpdateDto {
    #[validate(length(min = 1, max = 50, code = "validation.nome.length"))]
    pub nome: Option<String>,
    #[validate(length(min = 1, max = 50, code = "validation.cognome.length"))]
    pub cognome: Option<String>,
    #[validate(custom = "validate_telefono")]
    pub telefono: Option<String>,
    #[validate(email(code = "validation.email.format"))]
    pub email: Option<String>,
    pub medico_id: Option<i64>,
}

impl From<SegretarioCreateDto> for Segretario {
    fn from(dto: SegretarioCreateDto) -> Self {
        Segretario {
            id: 0,
            nome: dto.nome,
            cognome: dto.cognome,
            telefono: dto.telefono,
            email: dto.email,
            medico_id: dto.medico_id,
            record_status: RecordStatus::default(),
        }
    }
}

impl From<Segretario> for SegretarioDto {
    fn from(segretario: Segretario) -> Self {
        SegretarioDto {
            id: segretario.id,
            nome: segretario.nome,
            cognome: segretario.cognome,
            telefono: segretario.telefono,
            email: segretario.email,
            medico_id: segretario.medico_id,
        }
    }
}
