use serde::{Deserialize, Serialize};

use super::enums::RecordStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paziente {
    pub id: i64,
    pub nome: String,
    pub cognome: String,
    pub telefono: String,
    pub email: String,
    /// Italian tax code, stored upper-case.
    pub codice_fiscale: String,
    /// Family doctor.
    pub medico_id: i64,
    pub record_status: RecordStatus,
}
