//! Credential resolution module
//!
//! Resolves which stored token, if any, rides along as the bearer credential
//! on outgoing API requests. The admin token always takes precedence over the
//! regular auth token.

use crate::config::ClientConfig;

/// Scoped store of the tokens the application may hold
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    admin_token: Option<String>,
    auth_token: Option<String>,
}

impl CredentialStore {
    #[must_use]
    pub const fn new(admin_token: Option<String>, auth_token: Option<String>) -> Self {
        Self {
            admin_token,
            auth_token,
        }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.admin_token.clone(), config.auth_token.clone())
    }

    /// Resolve the bearer credential: admin token when present, else the auth
    /// token, else none.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.admin_token
            .as_deref()
            .or(self.auth_token.as_deref())
    }
}
