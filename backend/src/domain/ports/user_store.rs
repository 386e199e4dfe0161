//! Port abstraction for user persistence adapters and their errors.
//!
//! The store is the single source of truth for users and owns the
//! uniqueness rule on names. Adapters must enforce it atomically: of two
//! concurrent writes that would produce the same name, exactly one succeeds
//! and the other fails with [`UserStoreError::Conflict`]. Callers never
//! pre-check uniqueness.

use async_trait::async_trait;

use crate::domain::{ListLimit, User, UserId, UserName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user store adapters.
    pub enum UserStoreError {
        /// No user exists with the given identifier.
        NotFound {
            /// Identifier that matched no row.
            id: UserId,
        } => "user {id} not found",
        /// The write would duplicate an existing user's name.
        Conflict {
            /// Name that collided.
            name: String,
        } => "user name already taken: {name}",
        /// Store connection could not be established.
        Connection {
            /// Driver or pool error text.
            message: String,
        } => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Driver error text.
            message: String,
        } => "user store query failed: {message}",
    }
}

/// Durable storage for [`User`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return at most `limit` users ordered by ascending identifier.
    async fn list(&self, limit: ListLimit) -> Result<Vec<User>, UserStoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;

    /// Insert a user and return it with its assigned identifier.
    async fn create(&self, name: &UserName) -> Result<User, UserStoreError>;

    /// Replace the name of an existing user.
    ///
    /// Fails with `NotFound` for unknown ids and `Conflict` when another user
    /// already holds `name`. Renaming a user to its current name succeeds.
    async fn update(&self, id: UserId, name: &UserName) -> Result<User, UserStoreError>;

    /// Remove a user.
    async fn delete(&self, id: UserId) -> Result<(), UserStoreError>;

    /// Insert several users in one all-or-nothing batch.
    ///
    /// Identifiers are assigned in input order. Used to seed fixtures.
    async fn bulk_create(&self, names: &[UserName]) -> Result<Vec<User>, UserStoreError>;

    /// Remove every user and restart identifier assignment at 1.
    async fn reset(&self) -> Result<(), UserStoreError>;
}
