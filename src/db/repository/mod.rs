//! Repository layer: entity-scoped database operations.
//!
//! One unit struct per table. Shared queries (lookup by id, status filter,
//! targeted and bulk status flips) live as default methods on [`Repository`];
//! the person-shaped tables add email and name search through
//! [`PersonaRepository`]. Relations are resolved with explicit JOIN queries.

mod medico;
mod paziente;
mod prenotazione;
mod segretario;

use rusqlite::{params, Connection, OptionalExtension, Params, Row};

use super::DatabaseError;
use crate::models::RecordStatus;

pub use medico::*;
pub use paziente::*;
pub use prenotazione::*;
pub use segretario::*;

/// Base repository operations for any soft-deletable entity.
pub trait Repository {
    type Entity;

    /// Table name, also used as the entity label in errors.
    const TABLE: &'static str;
    /// Alias given to `TABLE` inside `SELECT`.
    const ALIAS: &'static str;
    /// `SELECT <columns> FROM <table> <alias>`, columns in `map_row` order.
    const SELECT: &'static str;

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Self::Entity>;

    /// Insert a new row and return the generated id. Any id on `entity` is ignored.
    fn insert(conn: &Connection, entity: &Self::Entity) -> Result<i64, DatabaseError>;

    /// Overwrite the attributes of an existing row. `record_status` is left alone.
    fn update(conn: &Connection, entity: &Self::Entity) -> Result<(), DatabaseError>;

    /// Run `SELECT ... <tail>` and collect every row.
    fn fetch_all<P: Params>(
        conn: &Connection,
        tail: &str,
        params: P,
    ) -> Result<Vec<Self::Entity>, DatabaseError> {
        let sql = format!("{} {tail}", Self::SELECT);
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params, Self::map_row)?;
        rows.map(|r| r.map_err(DatabaseError::from)).collect()
    }

    /// Run `SELECT ... <tail>` and return the first row, if any.
    fn fetch_optional<P: Params>(
        conn: &Connection,
        tail: &str,
        params: P,
    ) -> Result<Option<Self::Entity>, DatabaseError> {
        let sql = format!("{} {tail} LIMIT 1", Self::SELECT);
        Ok(conn.query_row(&sql, params, Self::map_row).optional()?)
    }

    /// Find by id regardless of status.
    fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self::Entity>, DatabaseError> {
        Self::fetch_optional(conn, &format!("WHERE {}.id = ?1", Self::ALIAS), params![id])
    }

    fn find_by_record_status(
        conn: &Connection,
        status: RecordStatus,
    ) -> Result<Vec<Self::Entity>, DatabaseError> {
        Self::fetch_all(
            conn,
            &format!(
                "WHERE {a}.record_status = ?1 ORDER BY {a}.id",
                a = Self::ALIAS
            ),
            params![status],
        )
    }

    /// Current status of a row, `None` when the id does not exist.
    fn find_record_status(
        conn: &Connection,
        id: i64,
    ) -> Result<Option<RecordStatus>, DatabaseError> {
        let sql = format!("SELECT record_status FROM {} WHERE id = ?1", Self::TABLE);
        Ok(conn
            .query_row(&sql, params![id], |row| row.get::<_, RecordStatus>(0))
            .optional()?)
    }

    /// Set the status of one row. Returns the number of rows touched.
    fn set_record_status(
        conn: &Connection,
        id: i64,
        status: RecordStatus,
    ) -> Result<usize, DatabaseError> {
        let sql = format!("UPDATE {} SET record_status = ?1 WHERE id = ?2", Self::TABLE);
        Ok(conn.execute(&sql, params![status, id])?)
    }

    /// Set the status of every row of the table in a single statement.
    fn set_all_record_status(
        conn: &Connection,
        status: RecordStatus,
    ) -> Result<usize, DatabaseError> {
        let sql = format!("UPDATE {} SET record_status = ?1", Self::TABLE);
        Ok(conn.execute(&sql, params![status])?)
    }

    fn soft_delete_by_id(conn: &Connection, id: i64) -> Result<usize, DatabaseError> {
        Self::set_record_status(conn, id, RecordStatus::Deleted)
    }

    fn soft_delete_all(conn: &Connection) -> Result<usize, DatabaseError> {
        Self::set_all_record_status(conn, RecordStatus::Deleted)
    }

    fn restore_by_id(conn: &Connection, id: i64) -> Result<usize, DatabaseError> {
        Self::set_record_status(conn, id, RecordStatus::Active)
    }

    fn restore_all(conn: &Connection) -> Result<usize, DatabaseError> {
        Self::set_all_record_status(conn, RecordStatus::Active)
    }
}

/// Queries shared by the tables describing a person (nome, cognome, email).
pub trait PersonaRepository: Repository {
    fn find_by_email(conn: &Connection, email: &str) -> Result<Option<Self::Entity>, DatabaseError> {
        Self::fetch_optional(conn, &format!("WHERE {}.email = ?1", Self::ALIAS), params![email])
    }

    /// Case-sensitive substring match on both nome and cognome, any status.
    fn search_by_nome_and_cognome(
        conn: &Connection,
        nome: &str,
        cognome: &str,
    ) -> Result<Vec<Self::Entity>, DatabaseError> {
        Self::fetch_all(
            conn,
            &format!("WHERE {} ORDER BY {}.id", name_match(Self::ALIAS), Self::ALIAS),
            params![nome, cognome],
        )
    }
}

/// `instr` is case-sensitive where `LIKE` is not; binds `?1` to nome and `?2` to cognome.
pub(crate) fn name_match(alias: &str) -> String {
    format!("instr({alias}.nome, ?1) > 0 AND instr({alias}.cognome, ?2) > 0")
}

/// Rows changed by an UPDATE must be exactly one, otherwise the id is unknown.
pub(crate) fn expect_single_row(
    changed: usize,
    entity_type: &str,
    id: i64,
) -> Result<(), DatabaseError> {
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: entity_type.to_string(),
            id,
        });
    }
    Ok(())
}
