use rusqlite::{params, Connection, Row};

use super::{expect_single_row, PersonaRepository, Repository};
use crate::db::DatabaseError;
use crate::models::Medico;

pub struct MedicoRepository;

impl Repository for MedicoRepository {
    type Entity = Medico;

    const TABLE: &'static str = "medico";
    const ALIAS: &'static str = "m";
    const SELECT: &'static str =
        "SELECT m.id, m.nome, m.cognome, m.telefono, m.email, m.record_status FROM medico m";

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Medico> {
        Ok(Medico {
            id: row.get(0)?,
            nome: row.get(1)?,
            cognome: row.get(2)?,
            telefono: row.get(3)?,
            email: row.get(4)?,
            record_status: row.get(5)?,
        })
    }

    fn insert(conn: &Connection, medico: &Medico) -> Result<i64, DatabaseError> {
        conn.execute(
            "INSERT INTO medico (nome, cognome, telefono, email, record_status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                medico.nome,
                medico.cognome,
                medico.telefono,
                medico.email,
                medico.record_status,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(conn: &Connection, medico: &Medico) -> Result<(), DatabaseError> {
        let changed = conn.execute(
            "UPDATE medico SET nome = ?1, cognome = ?2, telefono = ?3, email = ?4
             WHERE id = ?5",
            params![
                medico.nome,
                medico.cognome,
                medico.telefono,
                medico.email,
                medico.id,
            ],
        )?;
        expect_single_row(changed, Self::TABLE, medico.id)
    }
}

impl PersonaRepository for MedicoRepository {}

impl MedicoRepository {
    /// Doctor the given secretary works for.
    pub fn find_by_segretario_id(
        conn: &Connection,
        segretario_id: i64,
    ) -> Result<Option<Medico>, DatabaseError> {
        Self::fetch_optional(
            conn,
            "JOIN segretario s ON s.medico_id = m.id WHERE s.id = ?1",
            params![segretario_id],
        )
    }

    /// Family doctor of the given patient.
    pub fn find_by_paziente_id(
        conn: &Connection,
        paziente_id: i64,
    ) -> Result<Option<Medico>, DatabaseError> {
        Self::fetch_optional(
            conn,
            "JOIN paziente p ON p.medico_id = m.id WHERE p.id = ?1",
            params![paziente_id],
        )
    }

    pub fn find_by_prenotazione_id(
        conn: &Connection,
        prenotazione_id: i64,
    ) -> Result<Option<Medico>, DatabaseError> {
        Self::fetch_optional(
            conn,
            "JOIN prenotazione pr ON pr.medico_id = m.id WHERE pr.id = ?1",
            params![prenotazione_id],
        )
    }
}
