use serde::{Deserialize, Serialize};

use super::enums::RecordStatus;

/// Secretary working for exactly one doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segretario {
    pub id: i64,
    pub nome: String,
    pub cognome: String,
    pub telefono: String,
    pub email: String,
    pub medico_id: i64,
    pub record_status: RecordStatus,
}
