use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::enums::RecordStatus;

/// Appointment of a patient with a doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prenotazione {
    pub id: i64,
    pub data_prenotazione: NaiveDate,
    pub ora_prenotazione: NaiveTime,
    pub note: Option<String>,
    pub medico_id: i64,
    pub paziente_id: i64,
    pub record_status: RecordStatus,
}
