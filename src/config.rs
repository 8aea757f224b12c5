use std::net::SocketAddr;
use std::path::PathBuf;

use crate::messages::Language;

/// Application-level constants
pub const APP_NAME: &str = "StudioMedico";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const BIND_ENV: &str = "STUDIO_MEDICO_BIND";
pub const DB_ENV: &str = "STUDIO_MEDICO_DB";
pub const LANG_ENV: &str = "STUDIO_MEDICO_LANG";

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DB_FILE_NAME: &str = "studio_medico.db";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "studio_medico=info,tower_http=info"
}

/// ~/StudioMedico/ on all platforms. `None` when no home directory is known.
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_NAME))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid STUDIO_MEDICO_BIND '{value}': {reason}")]
    InvalidBind { value: String, reason: String },
    #[error("Invalid STUDIO_MEDICO_LANG: {0}")]
    InvalidLanguage(String),
    #[error("Cannot determine home directory; set STUDIO_MEDICO_DB")]
    NoDataDir,
}

/// Runtime configuration of the server.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    /// Language used when `Accept-Language` names none we support.
    pub default_language: Language,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind = var(BIND_ENV).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBind {
                value: bind.clone(),
                reason: e.to_string(),
            })?;

        let db_path = match var(DB_ENV) {
            Some(path) => PathBuf::from(path),
            None => app_data_dir().ok_or(ConfigError::NoDataDir)?.join(DB_FILE_NAME),
        };

        let default_language = match var(LANG_ENV) {
            Some(lang) => lang.trim().parse().map_err(ConfigError::InvalidLanguage)?,
            None => Language::It,
        };

        Ok(Self {
            bind_addr,
            db_path,
            default_language,
        })
    }
}
