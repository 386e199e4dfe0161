//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so tests can swap in mocks or an in-memory store.

use std::sync::Arc;

use crate::domain::ListLimit;
use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for the users handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side: list and fetch.
    pub users_query: Arc<dyn UsersQuery>,
    /// Write side: create, rename and delete.
    pub users_command: Arc<dyn UsersCommand>,
    /// Applied to `GET /users` when the request omits `limit`.
    pub default_limit: ListLimit,
}

impl HttpState {
    /// Bundle the ports with the default list limit of 10.
    pub fn new(users_query: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users_query,
            users_command,
            default_limit: ListLimit::default(),
        }
    }

    /// Build state from one value implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use users_backend::domain::UsersService;
    /// use users_backend::inbound::http::state::HttpState;
    /// use users_backend::outbound::memory::InMemoryUserStore;
    ///
    /// let service = UsersService::new(Arc::new(InMemoryUserStore::new()));
    /// let state = HttpState::from_service(Arc::new(service));
    /// assert_eq!(state.default_limit.get(), 10);
    /// ```
    pub fn from_service<T>(service: Arc<T>) -> Self
    where
        T: UsersQuery + UsersCommand + 'static,
    {
        Self::new(service.clone(), service)
    }

    /// Override the limit applied when `GET /users` omits one.
    pub fn with_default_limit(mut self, limit: ListLimit) -> Self {
        self.default_limit = limit;
        self
    }
}
