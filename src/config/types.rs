// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    pub port: u16,
    /// Host name used in the startup banner URLs
    pub display_host: String,
    pub workers: Option<usize>,
}

/// Location of the externally provisioned database
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub dir: String,
    pub file_name: String,
}

impl DatabaseConfig {
    /// Full path of the database file inside `dir`
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.file_name)
    }
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub customers_path: String,
    /// Value of `Access-Control-Allow-Origin` on every response
    pub allow_origin: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined or json)
    pub access_log_format: String,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// How long a client may take to send request headers, in seconds
    pub header_read_timeout: u64,
}
