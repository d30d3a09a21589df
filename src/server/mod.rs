//! Server module
//!
//! Listener setup, connection handling, and the shared per-process state
//! constructed explicitly from configuration.

pub mod connection;
pub mod listener;

pub use connection::run_server;
pub use listener::create_reusable_listener;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::fallback::ServerMode;
use crate::handler::shell::ShellDocument;

/// Shared application state
///
/// Read-only after construction; requests share it through an `Arc`.
pub struct AppState {
    pub config: Config,
    pub mode: ServerMode,
    pub shell: ShellDocument,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mode = config.server.server_mode();
        let shell = ShellDocument::new(shell_path(&config, mode));
        Self {
            config,
            mode,
            shell,
        }
    }
}

/// The shell document lives in the build output in production and at the
/// project root in development (beside the in-progress source tree).
fn shell_path(config: &Config, mode: ServerMode) -> PathBuf {
    match mode {
        ServerMode::Production => {
            Path::new(&config.static_files.build_dir).join(&config.static_files.shell_file)
        }
        ServerMode::Development => PathBuf::from(&config.static_files.shell_file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config::load_from("definitely-missing-config").expect("defaults load")
    }

    #[test]
    fn test_production_shell_lives_in_build_dir() {
        let state = AppState::new(base_config());
        assert_eq!(state.mode, ServerMode::Production);
        assert_eq!(state.shell.path(), Path::new("dist/index.html"));
    }

    #[test]
    fn test_development_shell_lives_at_project_root() {
        let mut config = base_config();
        config.server.mode = "development".to_string();
        let state = AppState::new(config);
        assert_eq!(state.mode, ServerMode::Development);
        assert_eq!(state.shell.path(), Path::new("index.html"));
    }
}
