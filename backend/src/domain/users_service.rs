//! User use-cases implemented over the [`UserStore`] port.
//!
//! The service owns the translation from store outcomes to domain errors.
//! It performs no uniqueness pre-checks; collisions surface from the store
//! as [`UserStoreError::Conflict`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use super::ports::{UserStore, UserStoreError, UsersCommand, UsersQuery};
use super::{Error, ListLimit, User, UserId, UserName};

/// Implements [`UsersQuery`] and [`UsersCommand`] for any store adapter.
pub struct UsersService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for UsersService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ?Sized> UsersService<S> {
    /// Create a service backed by `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

const STORE_UNAVAILABLE_MESSAGE: &str = "user store unavailable";

fn map_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::NotFound { id } => Error::not_found(format!("user {id} not found")),
        UserStoreError::Conflict { name } => {
            debug!(%name, "user name collision");
            Error::conflict(format!("user name already taken: {name}"))
        }
        UserStoreError::Connection { message } => {
            error!(%message, "user store unavailable");
            Error::service_unavailable(STORE_UNAVAILABLE_MESSAGE)
        }
        UserStoreError::Query { message } => {
            error!(%message, "user store query failed");
            Error::internal(message)
        }
    }
}

fn not_found(id: UserId) -> Error {
    map_store_error(UserStoreError::not_found(id))
}

#[async_trait]
impl<S> UsersQuery for UsersService<S>
where
    S: UserStore + ?Sized,
{
    async fn list_users(&self, limit: ListLimit) -> Result<Vec<User>, Error> {
        self.store.list(limit).await.map_err(map_store_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.store
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl<S> UsersCommand for UsersService<S>
where
    S: UserStore + ?Sized,
{
    async fn create_user(&self, name: UserName) -> Result<User, Error> {
        self.store.create(&name).await.map_err(map_store_error)
    }

    async fn update_user(&self, id: UserId, name: UserName) -> Result<User, Error> {
        if self
            .store
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .is_none()
        {
            return Err(not_found(id));
        }
        self.store.update(id, &name).await.map_err(map_store_error)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        match self.store.delete(id).await {
            Ok(()) => Ok(()),
            Err(UserStoreError::NotFound { .. }) => {
                debug!(%id, "delete of unknown user treated as success");
                Ok(())
            }
            Err(other) => Err(map_store_error(other)),
        }
    }
}
