// Configuration module entry point
// Loads layered configuration: file, environment, built-in defaults

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::{
    ClientConfig, Config, LoggingConfig, PerformanceConfig, RoutesConfig, ServerConfig,
    StaticConfig,
};

impl Config {
    /// Load configuration from "config.toml" plus `SPA_`-prefixed environment
    /// variables, falling back to built-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SPA").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5173)?
            .set_default("server.mode", "production")?
            .set_default("static.build_dir", "dist")?
            .set_default("static.source_root", "src")?
            .set_default("static.shell_file", "index.html")?
            .set_default("static.max_age", 3600)? // 1 hour freshness window
            .set_default("static.index_files", vec!["index.html", "index.htm"])?
            .set_default("routes.api_prefix", "/api")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("client.base_url", "http://localhost:8000")?
            .set_default("client.timeout_ms", 30_000)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
