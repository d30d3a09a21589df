// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

use crate::fallback::ServerMode;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(rename = "static")]
    pub static_files: StaticConfig,
    pub routes: RoutesConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub client: ClientConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// "production" serves the build output only; "development" additionally
    /// consults the in-progress source tree before the shell fallback.
    pub mode: String,
    pub workers: Option<usize>,
}

impl ServerConfig {
    #[must_use]
    pub fn server_mode(&self) -> ServerMode {
        if self.mode.eq_ignore_ascii_case("development") {
            ServerMode::Development
        } else {
            ServerMode::Production
        }
    }
}

/// Static file serving configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StaticConfig {
    /// Build output directory with compiled assets
    pub build_dir: String,
    /// In-progress source tree, consulted in development mode only
    pub source_root: String,
    /// Shell document file name, resolved against the build directory
    pub shell_file: String,
    /// Cache-Control freshness window for production assets, in seconds
    pub max_age: u32,
    pub index_files: Vec<String>,
}

/// Routing configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RoutesConfig {
    /// Reserved prefix for backend API paths; never served the shell document
    pub api_prefix: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Backend API client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Target backend origin
    pub base_url: String,
    /// Abort a request after this duration; no retry on timeout
    pub timeout_ms: u64,
    /// Attached as bearer credential when present; takes precedence
    #[serde(default)]
    pub admin_token: Option<String>,
    /// Attached as bearer credential only if no admin token is present
    #[serde(default)]
    pub auth_token: Option<String>,
}
