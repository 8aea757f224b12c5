use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Prenotazione, RecordStatus};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PrenotazioneCreateDto {
    pub data_prenotazione: NaiveDate,
    pub ora_prenotazione: NaiveTime,
    #[validate(length(max = 500, code = "validation.note.length"))]
    pub note: Option<String>,
    pub medico_id: i64,
    pub paziente_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrenotazioneDto {
    pub id: i64,
    pub data_prenotazione: NaiveDate,
    pub ora_prenotazione: NaiveTime,
    pub note: Option<String>,
    pub medico_id: i64,
    pub paziente_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PrenotazioneUpdateDto {
    pub data_prenotazione: Option<NaiveDate>,
    pub ora_prenotazione: Option<NaiveTime>,
    #[validate(length(max = 500, code = "validation.note.length"))]
    pub note: Option<String>,
    pub medico_id: Option<i64>,
    pub paziente_id: Option<i64>,
}

impl From<PrenotazioneCreateDto> for Prenotazione {
    fn from(dto: PrenotazioneCreateDto) -> Self {
        Prenotazione {
            id: 0,
            data_prenotazione: dto.data_prenotazione,
            ora_prenotazione: dto.ora_prenotazione,
            note: dto.note,
            medico_id: dto.medico_id,
            paziente_id: dto.paziente_id,
            record_status: RecordStatus::default(),
        }
    }
}

impl From<Prenotazione> for PrenotazioneDto {
    fn from(prenotazione: Prenotazione) -> Self {
        PrenotazioneDto {
            id: prenotazione.id,
            data_prenotazione: prenotazione.data_prenotazione,
            ora_prenotazione: prenotazione.ora_prenotazione,
            note: prenotazione.note,
            medico_id: prenotazione.medico_id,
            paziente_id: prenotazione.paziente_id,
        }
    }
}
