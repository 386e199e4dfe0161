//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserName};

/// Domain use-case port for creating, renaming, and removing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Create a user, failing with `conflict` when the name is taken.
    async fn create_user(&self, name: UserName) -> Result<User, Error>;

    /// Replace a user's name.
    ///
    /// Fails with `not_found` for unknown ids and `conflict` when another
    /// user holds the name.
    async fn update_user(&self, id: UserId, name: UserName) -> Result<User, Error>;

    /// Remove a user. Removing an unknown id succeeds.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
