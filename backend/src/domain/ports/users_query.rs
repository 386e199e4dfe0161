//! Driving port for user-facing reads.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch users without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, ListLimit, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return at most `limit` users.
    async fn list_users(&self, limit: ListLimit) -> Result<Vec<User>, Error>;

    /// Return the user with `id`, failing with `not_found` when absent.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
