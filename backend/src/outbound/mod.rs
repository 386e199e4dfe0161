//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local store used when no database is configured and
//!   by the HTTP test suites
//! - **persistence**: PostgreSQL-backed store using Diesel ORM
//!
//! Adapters are thin translators between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod memory;
pub mod persistence;
