//! HTTP server configuration object and helpers.

use taskboard::settings::ServerSettings;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
}

impl ServerConfig {
    /// Construct a server configuration bound to `host:port`.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            bind_addr: (host.into(), port),
        }
    }

    /// Derive the configuration from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &ServerSettings) -> Self {
        let (host, port) = settings.bind_addr();
        Self::new(host, port)
    }

    /// Return the address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by unit tests; retained for fixture access")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.bind_addr.0.as_str(), self.bind_addr.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn settings_populate_the_bind_address() {
        let settings = ServerSettings {
            host: Some("127.0.0.1".into()),
            port: 8080,
            log_format: None,
        };

        let config = ServerConfig::from_settings(&settings);

        assert_eq!(config.bind_addr(), ("127.0.0.1", 8080));
    }
}
