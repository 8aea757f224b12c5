use serde::{Deserialize, Serialize};

use super::enums::RecordStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medico {
    pub id: i64,
    pub nome: String,
    pub cognome: String,
    pub telefono: String,
    pub email: String,
    pub record_status: RecordStatus,
}
