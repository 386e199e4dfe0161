//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`UserStore`]) expose strongly typed errors so adapters map
//! their failures into predictable variants. Driving ports ([`UsersQuery`],
//! [`UsersCommand`]) speak the transport-agnostic [`crate::domain::Error`].

mod macros;
pub(crate) use macros::define_port_error;

mod user_store;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
