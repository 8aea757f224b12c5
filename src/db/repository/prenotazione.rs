use rusqlite::{params, Connection, Row};

use super::{expect_single_row, Repository};
use crate::db::DatabaseError;
use crate::models::Prenotazione;

pub struct PrenotazioneRepository;

impl Repository for PrenotazioneRepository {
    type Entity = Prenotazione;

    const TABLE: &'static str = "prenotazione";
    const ALIAS: &'static str = "pr";
    const SELECT: &'static str = "SELECT pr.id, pr.data_prenotazione, pr.ora_prenotazione, \
         pr.note, pr.medico_id, pr.paziente_id, pr.record_status FROM prenotazione pr";

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Prenotazione> {
        Ok(Prenotazione {
            id: row.get(0)?,
            data_prenotazione: row.get(1)?,
            ora_prenotazione: row.get(2)?,
            note: row.get(3)?,
            medico_id: row.get(4)?,
            paziente_id: row.get(5)?,
            record_status: row.get(6)?,
        })
    }

    fn insert(conn: &Connection, prenotazione: &Prenotazione) -> Result<i64, DatabaseError> {
        conn.execute(
            "INSERT INTO prenotazione (data_prenotazione, ora_prenotazione, note, medico_id,
             paziente_id, record_status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                prenotazione.data_prenotazione,
                prenotazione.ora_prenotazione,
                prenotazione.note,
                prenotazione.medico_id,
                prenotazione.paziente_id,
                prenotazione.record_status,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(conn: &Connection, prenotazione: &Prenotazione) -> Result<(), DatabaseError> {
        let changed = conn.execute(
            "UPDATE prenotazione SET data_prenotazione = ?1, ora_prenotazione = ?2, note = ?3,
             medico_id = ?4, paziente_id = ?5 WHERE id = ?6",
            params![
                prenotazione.data_prenotazione,
                prenotazione.ora_prenotazione,
                prenotazione.note,
                prenotazione.medico_id,
                prenotazione.paziente_id,
                prenotazione.id,
            ],
        )?;
        expect_single_row(changed, Self::TABLE, prenotazione.id)
    }
}

impl PrenotazioneRepository {
    pub fn find_by_medico_id(
        conn: &Connection,
        medico_id: i64,
    ) -> Result<Vec<Prenotazione>, DatabaseError> {
        Self::fetch_all(
            conn,
            "WHERE pr.medico_id = ?1 ORDER BY pr.data_prenotazione, pr.ora_prenotazione",
            params![medico_id],
        )
    }

    pub fn find_by_paziente_id(
        conn: &Connection,
        paziente_id: i64,
    ) -> Result<Vec<Prenotazione>, DatabaseError> {
        Self::fetch_all(
            conn,
            "WHERE pr.paziente_id = ?1 ORDER BY pr.data_prenotazione, pr.ora_prenotazione",
            params![paziente_id],
        )
    }
}
