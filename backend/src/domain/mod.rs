//! Domain primitives, ports, and use-cases.
//!
//! Purpose: define the strongly typed user model and the transport-agnostic
//! error contract shared by the HTTP and persistence adapters.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload and its stable category.
//! - User / UserId / UserName / ListLimit: the user resource and its inputs.
//! - TraceId: request-scoped correlation identifier.
//! - UsersService: list/get/create/update/delete over a [`ports::UserStore`].

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod users_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    DEFAULT_LIST_LIMIT, ListLimit, USER_NAME_MAX, User, UserId, UserName, UserValidationError,
};
pub use self::users_service::UsersService;
