//! Server Configuration

/// Settings read from the environment (and `.env`)
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address, `BIND_ADDR`
    pub bind_addr: String,

    /// `tracing` filter directives, `RUST_LOG`
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            log_filter: "info,tower_http=debug".into(),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            log_filter: std::env::var("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}
