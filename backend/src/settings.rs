//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TASKBOARD_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence.

use std::fmt;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
        })
    }
}

impl FromStr for LogFormat {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(SettingsError::UnknownLogFormat {
                value: s.to_owned(),
            }),
        }
    }
}

/// Settings that cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("unknown log format `{value}`; expected `json` or `pretty`")]
    UnknownLogFormat { value: String },
}

/// Listener and logging configuration for the server binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TASKBOARD")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Log output format, `json` or `pretty`.
    pub log_format: Option<String>,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, 8080 unless overridden.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Address pair suitable for `HttpServer::bind`.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host().to_owned(), self.port())
    }

    /// Configured log format; JSON unless overridden.
    pub fn log_format(&self) -> Result<LogFormat, SettingsError> {
        self.log_format
            .as_deref()
            .map_or(Ok(LogFormat::default()), |raw| raw.parse())
    }
}
