//! Route registration for the users API.
//!
//! The application is assembled from an explicit [`HttpState`], so each test
//! can build its own isolated instance.
//!
//! [`HttpState`]: super::state::HttpState

use actix_web::{HttpRequest, error::QueryPayloadError, web};

use super::users::{create_user, delete_user, get_user, list_users, update_user};
use super::validation::{QUERY, invalid_parameter_error};

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    invalid_parameter_error(QUERY, format!("invalid query string: {err}"), None).into()
}

/// Register the users endpoints.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use actix_web::{App, web};
/// use users_backend::domain::UsersService;
/// use users_backend::inbound::http::{router, state::HttpState};
/// use users_backend::outbound::memory::InMemoryUserStore;
///
/// let service = UsersService::new(Arc::new(InMemoryUserStore::new()));
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::from_service(Arc::new(service))))
///     .configure(router::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}
