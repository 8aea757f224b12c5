use rusqlite::{params, Connection, Row};

use super::{expect_single_row, name_match, PersonaRepository, Repository};
use crate::db::DatabaseError;
use crate::models::Paziente;

pub struct PazienteRepository;

impl Repository for PazienteRepository {
    type Entity = Paziente;

    const TABLE: &'static str = "paziente";
    const ALIAS: &'static str = "p";
    const SELECT: &'static str = "SELECT p.id, p.nome, p.cognome, p.telefono, p.email, \
         p.codice_fiscale, p.medico_id, p.record_status FROM paziente p";

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Paziente> {
        Ok(Paziente {
            id: row.get(0)?,
            nome: row.get(1)?,
            cognome: row.get(2)?,
            telefono: row.get(3)?,
            email: row.get(4)?,
            codice_fiscale: row.get(5)?,
            medico_id: row.get(6)?,
            record_status: row.get(7)?,
        })
    }

    fn insert(conn: &Connection, paziente: &Paziente) -> Result<i64, DatabaseError> {
        conn.execute(
            "INSERT INTO paziente (nome, cognome, telefono, email, codice_fiscale, medico_id,
             record_status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                paziente.nome,
                paziente.cognome,
                paziente.telefono,
                paziente.email,
                paziente.codice_fiscale,
                paziente.medico_id,
                paziente.record_status,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(conn: &Connection, paziente: &Paziente) -> Result<(), DatabaseError> {
        let changed = conn.execute(
            "UPDATE paziente SET nome = ?1, cognome = ?2, telefono = ?3, email = ?4,
             codice_fiscale = ?5, medico_id = ?6 WHERE id = ?7",
            params![
                paziente.nome,
                paziente.cognome,
                paziente.telefono,
                paziente.email,
                paziente.codice_fiscale,
                paziente.medico_id,
                paziente.id,
            ],
        )?;
        expect_single_row(changed, Self::TABLE, paziente.id)
    }
}

impl PersonaRepository for PazienteRepository {}

impl PazienteRepository {
    pub fn find_by_medico_id(
        conn: &Connection,
        medico_id: i64,
    ) -> Result<Vec<Paziente>, DatabaseError> {
        Self::fetch_all(conn, "WHERE p.medico_id = ?1 ORDER BY p.id", params![medico_id])
    }

    /// Patients of the doctor the given secretary works for.
    pub fn find_by_segretario_id(
        conn: &Connection,
        segretario_id: i64,
    ) -> Result<Vec<Paziente>, DatabaseError> {
        Self::fetch_all(
            conn,
            "JOIN segretario s ON s.medico_id = p.medico_id WHERE s.id = ?1 ORDER BY p.id",
            params![segretario_id],
        )
    }

    pub fn find_by_prenotazione_id(
        conn: &Connection,
        prenotazione_id: i64,
    ) -> Result<Option<Paziente>, DatabaseError> {
        Self::fetch_optional(
            conn,
            "JOIN prenotazione pr ON pr.paziente_id = p.id WHERE pr.id = ?1",
            params![prenotazione_id],
        )
    }

    pub fn find_by_codice_fiscale(
        conn: &Connection,
        codice_fiscale: &str,
    ) -> Result<Option<Paziente>, DatabaseError> {
        Self::fetch_optional(conn, "WHERE p.codice_fiscale = ?1", params![codice_fiscale])
    }

    pub fn search_by_nome_and_cognome_and_medico_id(
        conn: &Connection,
        nome: &str,
        cognome: &str,
        medico_id: i64,
    ) -> Result<Vec<Paziente>, DatabaseError> {
        Self::fetch_all(
            conn,
            &format!("WHERE {} AND p.medico_id = ?3 ORDER BY p.id", name_match(Self::ALIAS)),
            params![nome, cognome, medico_id],
        )
    }

    pub fn search_by_nome_and_cognome_and_segretario_id(
        conn: &Connection,
        nome: &str,
        cognome: &str,
        segretario_id: i64,
    ) -> Result<Vec<Paziente>, DatabaseError> {
        Self::fetch_all(
            conn,
            &format!(
                "JOIN segretario s ON s.medico_id = p.medico_id \
                 WHERE {} AND s.id = ?3 ORDER BY p.id",
                name_match(Self::ALIAS)
            ),
            params![nome, cognome, segretario_id],
        )
    }
}
