pub mod repository;
pub mod sqlite;

pub use repository::*;
pub use sqlite::*;

use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: i64 },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Cannot prepare database location: {0}")]
    Io(#[from] std::io::Error),

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },
}

impl DatabaseError {
    /// UNIQUE, FOREIGN KEY, CHECK and NOT NULL failures reported by SQLite.
    pub fn is_integrity_violation(&self) -> bool {
        match self {
            DatabaseError::Sqlite(rusqlite::Error::SqliteFailure(err, _)) => {
                err.code == ErrorCode::ConstraintViolation
            }
            _ => false,
        }
    }
}
