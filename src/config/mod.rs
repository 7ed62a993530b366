// Configuration module entry point
// Loads application configuration from file and environment

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::{Config, LoggingConfig, PerformanceConfig, ResourcesConfig, ServerConfig};

impl Config {
    /// Load configuration from the default file path ("pathserve.toml" when present)
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("pathserve")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// A missing file is not an error; defaults and `PATHSERVE`-prefixed
    /// environment variables still apply.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("PATHSERVE"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
