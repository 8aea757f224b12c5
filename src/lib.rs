pub mod api;
pub mod config;
pub mod core_state;
pub mod db;
pub mod dto;
pub mod messages;
pub mod models;
pub mod services;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::core_state::CoreState;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Load configuration, prepare the database and serve the API until Ctrl-C.
pub async fn run() -> Result<(), String> {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    let core = Arc::new(CoreState::from_config(&config));
    core.initialize().map_err(|e| e.to_string())?;

    let server = api::start_api_server(core, config.bind_addr).await?;
    tracing::info!(
        addr = %server.session.server_addr,
        language = config.default_language.as_str(),
        "Listening"
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for Ctrl-C: {e}");
    }

    server.stop().await;
    Ok(())
}
