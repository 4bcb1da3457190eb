// Configuration module entry point
// Assembles the typed configuration and the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, DatabaseConfig};

impl Config {
    /// Build the configuration from built-in defaults.
    ///
    /// The service exposes no configuration surface: no file or environment
    /// source is registered, so every value below is the effective one.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.display_host", "localhost")?
            .set_default("database.dir", "./db")?
            .set_default("database.file_name", "Northwind.db")?
            .set_default("http.customers_path", "/customers")?
            .set_default("http.allow_origin", "*")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.header_read_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Base URL announced to operators, e.g. `http://localhost:3000`
    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.server.display_host, self.server.port)
    }
}
