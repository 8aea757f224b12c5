use crate::db::DatabaseError;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern,
/// stored in SQLite as its text form.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        $(#[$meta])*
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|e: DatabaseError| FromSqlError::Other(Box::new(e)))
            }
        }
    };
}

str_enum!(
    /// Lifecycle flag gating default visibility of every entity.
    #[derive(Copy, Hash)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    RecordStatus {
        Active => "ACTIVE",
        Deleted => "DELETED",
    }
);

impl Default for RecordStatus {
    fn default() -> Self {
        RecordStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn record_status_round_trip() {
        for (variant, s) in [
            (RecordStatus::Active, "ACTIVE"),
            (RecordStatus::Deleted, "DELETED"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(RecordStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(RecordStatus::from_str("active").is_err());
        assert!(RecordStatus::from_str("").is_err());
    }

    #[test]
    fn record_status_defaults_to_active() {
        assert_eq!(RecordStatus::default(), RecordStatus::Active);
    }

    #[test]
    fn record_status_serializes_upper_case() {
        let json = serde_json::to_string(&RecordStatus::Deleted).unwrap();
        assert_eq!(json, "\"DELETED\"");
    }

    #[test]
    fn record_status_reads_back_from_sqlite() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let status: RecordStatus = conn
            .query_row("SELECT ?1", [RecordStatus::Deleted], |row| row.get(0))
            .unwrap();
        assert_eq!(status, RecordStatus::Deleted);
    }
}
