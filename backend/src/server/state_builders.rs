//! Store selection and HTTP state assembly.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use users_backend::domain::UsersService;
use users_backend::domain::ports::UserStore;
use users_backend::inbound::http::state::HttpState;
use users_backend::outbound::memory::InMemoryUserStore;
use users_backend::outbound::persistence::DieselUserStore;

use super::ServerConfig;

fn build_store(config: &ServerConfig) -> Arc<dyn UserStore> {
    match &config.db_pool {
        Some(pool) => {
            info!("serving users from PostgreSQL");
            Arc::new(DieselUserStore::new(pool.clone()))
        }
        None => {
            warn!("no database configured; users are kept in memory and lost on exit");
            Arc::new(InMemoryUserStore::new())
        }
    }
}

pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = UsersService::new(build_store(config));
    web::Data::new(
        HttpState::from_service(Arc::new(service)).with_default_limit(config.default_limit),
    )
}
