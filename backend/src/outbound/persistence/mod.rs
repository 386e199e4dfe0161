//! PostgreSQL persistence adapter.
//!
//! - [`DbPool`] owns the async connection pool.
//! - [`DieselUserStore`] implements [`crate::domain::ports::UserStore`].
//! - [`run_pending_migrations`] applies the embedded schema.

mod diesel_user_store;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_store::DieselUserStore;
pub use migrations::{MigrationError, rebuild_schema, run_pending_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
