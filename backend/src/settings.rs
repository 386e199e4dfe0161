//! Server settings loaded via OrthoConfig.
//!
//! Values come from `USERS_*` environment variables, command-line flags, or
//! a configuration file. Value fields are optional and accessors supply
//! defaults. Switches are plain `bool` flags that default to off.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_LIST_LIMIT, ListLimit, UserValidationError};
use crate::outbound::persistence::DEFAULT_MAX_CONNECTIONS;

/// Bind address used when `USERS_HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Bind port used when `USERS_PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime settings for the `users-backend` server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct ServerSettings {
    /// Address to bind. Defaults to `0.0.0.0`.
    pub host: Option<String>,
    /// Port to bind. Defaults to 3000.
    pub port: Option<u16>,
    /// PostgreSQL URL. When absent the server keeps users in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Records returned by `GET /users` when `limit` is omitted.
    pub default_limit: Option<i64>,
    /// Serve without applying pending migrations first.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl ServerSettings {
    /// Return the bind address, falling back to [`DEFAULT_HOST`].
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the bind port, falling back to [`DEFAULT_PORT`].
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the trimmed database URL. Blank values count as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the pool ceiling, falling back to [`DEFAULT_MAX_CONNECTIONS`].
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Return the list limit applied when a request omits one.
    ///
    /// # Errors
    ///
    /// Returns [`UserValidationError::NegativeLimit`] for a negative override.
    pub fn default_limit(&self) -> Result<ListLimit, UserValidationError> {
        ListLimit::new(self.default_limit.unwrap_or(DEFAULT_LIST_LIMIT))
    }

    /// Whether to apply pending migrations at startup. True unless
    /// `USERS_SKIP_MIGRATIONS` or `--skip-migrations` is set.
    pub fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }
}
