use std::env;

/// How the listener terminates connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// Plaintext HTTP.
    None,
    /// Self-signed certificate created by invoking the `openssl` binary,
    /// reusing `cert.pem`/`key.pem` when they already exist.
    Openssl,
    /// Certificate generated in-process, no external tooling.
    Generated,
}

impl TlsMode {
    fn from_env() -> Self {
        match env::var("TLS_MODE").ok().as_deref() {
            Some("openssl") => TlsMode::Openssl,
            Some("generated") => TlsMode::Generated,
            Some("none") | None => TlsMode::None,
            Some(other) => {
                log::warn!("Unknown TLS_MODE '{}', serving plain HTTP.", other);
                TlsMode::None
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub https_port: u16,
    pub tls_mode: TlsMode,
}

impl ServerConfig {
    /// Every knob has a default, so configuration can never fail startup.
    pub fn from_env() -> Self {
        Self {
            port: port_from_env("PORT", 3000),
            https_port: port_from_env("HTTPS_PORT", 3443),
            tls_mode: TlsMode::from_env(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            https_port: 3443,
            tls_mode: TlsMode::None,
        }
    }
}

fn port_from_env(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
