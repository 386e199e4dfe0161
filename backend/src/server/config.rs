//! HTTP server configuration object.

use users_backend::domain::ListLimit;
use users_backend::outbound::persistence::DbPool;

/// Builder-style configuration for [`super::create_server`].
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) default_limit: ListLimit,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            default_limit: ListLimit::default(),
            db_pool: None,
        }
    }

    /// Serve users from PostgreSQL instead of process memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_default_limit(mut self, limit: ListLimit) -> Self {
        self.default_limit = limit;
        self
    }
}
