//! Backend entry-point: loads settings, installs logging and serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use taskboard::inbound::http::health::HealthState;
use taskboard::settings::{LogFormat, ServerSettings};

fn init_tracing(format: LogFormat) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let log_format = settings.log_format().map_err(std::io::Error::other)?;
    init_tracing(log_format);

    let config = ServerConfig::from_settings(&settings);
    info!(host = settings.host(), port = settings.port(), %log_format, "starting server");

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
