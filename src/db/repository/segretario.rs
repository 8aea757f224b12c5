use rusqlite::{params, Connection, Row};

use super::{expect_single_row, name_match, PersonaRepository, Repository};
use crate::db::DatabaseError;
use crate::models::Segretario;

pub struct SegretarioRepository;

impl Repository for SegretarioRepository {
    type Entity = Segretario;

    const TABLE: &'static str = "segretario";
    const ALIAS: &'static str = "s";
    const SELECT: &'static str = "SELECT s.id, s.nome, s.cognome, s.telefono, s.email, \
         s.medico_id, s.record_status FROM segretario s";

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Segretario> {
        Ok(Segretario {
            id: row.get(0)?,
            nome: row.get(1)?,
            cognome: row.get(2)?,
            telefono: row.get(3)?,
            email: row.get(4)?,
            medico_id: row.get(5)?,
            record_status: row.get(6)?,
        })
    }

    fn insert(conn: &Connection, segretario: &Segretario) -> Result<i64, DatabaseError> {
        conn.execute(
            "INSERT INTO segretario (nome, cognome, telefono, email, medico_id, record_status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                segretario.nome,
                segretario.cognome,
                segretario.telefono,
                segretario.email,
                segretario.medico_id,
                segretario.record_status,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(conn: &Connection, segretario: &Segretario) -> Result<(), DatabaseError> {
        let changed = conn.execute(
            "UPDATE segretario SET nome = ?1, cognome = ?2, telefono = ?3, email = ?4,
             medico_id = ?5 WHERE id = ?6",
            params![
                segretario.nome,
                segretario.cognome,
                segretario.telefono,
                segretario.email,
                segretario.medico_id,
                segretario.id,
            ],
        )?;
        expect_single_row(changed, Self::TABLE, segretario.id)
    }
}

impl PersonaRepository for SegretarioRepository {}

impl SegretarioRepository {
    pub fn find_by_medico_id(
        conn: &Connection,
        medico_id: i64,
    ) -> Result<Vec<Segretario>, DatabaseError> {
        Self::fetch_all(conn, "WHERE s.medico_id = ?1 ORDER BY s.id", params![medico_id])
    }

    pub fn search_by_nome_and_cognome_and_medico_id(
        conn: &Connection,
        nome: &str,
        cognome: &str,
        medico_id: i64,
    ) -> Result<Vec<Segretario>, DatabaseError> {
        Self::fetch_all(
            conn,
            &format!("WHERE {} AND s.medico_id = ?3 ORDER BY s.id", name_match(Self::ALIAS)),
            params![nome, cognome, medico_id],
        )
    }
}
