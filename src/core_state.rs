//! Transport-agnostic application state.
//!
//! Holds what every request needs to build its services: where the database
//! lives and which language to fall back to. Connections are opened per
//! request; SQLite serializes writers through its own file lock.

use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::db::{self, DatabaseError};
use crate::messages::Language;

pub struct CoreState {
    db_path: PathBuf,
    default_language: Language,
}

impl CoreState {
    pub fn new(db_path: impl Into<PathBuf>, default_language: Language) -> Self {
        Self {
            db_path: db_path.into(),
            default_language,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.db_path.clone(), config.default_language)
    }

    /// Open the database once at startup, applying pending migrations.
    pub fn initialize(&self) -> Result<(), CoreError> {
        let conn = self.open_db()?;
        let version = db::get_current_version(&conn);
        tracing::info!(path = %self.db_path.display(), version, "Database ready");
        Ok(())
    }

    /// Open a fresh connection to the database, running pending migrations.
    pub fn open_db(&self) -> Result<rusqlite::Connection, CoreError> {
        db::open_database(&self.db_path).map_err(CoreError::Database)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("studio.db");
        let state = CoreState::new(&path, Language::It);

        state.initialize().unwrap();
        assert!(path.exists());
        assert_eq!(state.db_path(), path.as_path());
    }

    #[test]
    fn connections_share_the_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let state = CoreState::new(dir.path().join("studio.db"), Language::En);

        let first = state.open_db().unwrap();
        first
            .execute(
                "INSERT INTO medico (nome, cognome, telefono, email) VALUES ('A', 'B', '061234567', 'a@b.it')",
                [],
            )
            .unwrap();
        drop(first);

        let second = state.open_db().unwrap();
        let count: i64 = second
            .query_row("SELECT COUNT(*) FROM medico", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(state.default_language(), Language::En);
    }

    #[test]
    fn unusable_path_is_a_database_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file.
        let state = CoreState::new(dir.path(), Language::It);
        assert!(matches!(state.open_db(), Err(CoreError::Database(_))));
    }
}
