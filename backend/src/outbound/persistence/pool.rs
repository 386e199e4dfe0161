//! bb8 pool of `diesel-async` PostgreSQL connections.
//!
//! The pool is built lazily-connecting: `build` validates the URL and pool
//! settings, and connections are opened on first checkout. This lets the
//! server start and report not-ready while the database is still coming up.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Default ceiling on open connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);

/// Failures raised while building the pool or checking out a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available before the checkout timeout.
    #[error("database connection checkout failed: {message}")]
    Checkout {
        /// Underlying pool error text.
        message: String,
    },

    /// Pool settings were rejected.
    #[error("database pool could not be built: {message}")]
    Build {
        /// Reason the settings were rejected.
        message: String,
    },
}

impl PoolError {
    /// Build a [`PoolError::Checkout`].
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Build a [`PoolError::Build`].
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Settings for [`DbPool::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    database_url: String,
    max_connections: u32,
    checkout_timeout: Duration,
}

impl PoolConfig {
    /// Start from `database_url` with ten connections and a five second
    /// checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    /// Override the connection ceiling.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Override how long a checkout waits for a free connection.
    pub fn with_checkout_timeout(mut self, timeout: Duration) -> Self {
        self.checkout_timeout = timeout;
        self
    }

    /// PostgreSQL connection URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Connection ceiling.
    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

/// Shared handle to the connection pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool without opening any connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when `max_connections` is zero.
    pub fn build(config: &PoolConfig) -> Result<Self, PoolError> {
        if config.max_connections == 0 {
            return Err(PoolError::build("max connections must be at least 1"));
        }
        let manager =
            AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url.as_str());
        let inner = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(None)
            .connection_timeout(config.checkout_timeout)
            .build_unchecked(manager);
        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when the database cannot be reached
    /// within the checkout timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn config_defaults() {
        let config = PoolConfig::new("postgres://localhost/users");
        assert_eq!(config.database_url(), "postgres://localhost/users");
        assert_eq!(config.max_connections(), DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.checkout_timeout, DEFAULT_CHECKOUT_TIMEOUT);
    }

    #[rstest]
    fn config_overrides() {
        let config = PoolConfig::new("postgres://localhost/users")
            .with_max_connections(3)
            .with_checkout_timeout(Duration::from_millis(250));
        assert_eq!(config.max_connections(), 3);
        assert_eq!(config.checkout_timeout, Duration::from_millis(250));
    }

    #[rstest]
    fn build_rejects_empty_pool() {
        let config = PoolConfig::new("postgres://localhost/users").with_max_connections(0);
        let Err(err) = DbPool::build(&config) else {
            panic!("zero-sized pool must be rejected");
        };
        assert!(matches!(err, PoolError::Build { .. }));
    }
}
