//! HTTP inbound adapter exposing the users REST endpoints.

pub mod error;
pub mod health;
pub mod router;
pub mod schemas;
pub mod state;
pub mod users;
mod validation;

pub use error::ApiResult;
