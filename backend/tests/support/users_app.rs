//! In-process users application for HTTP tests.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use users_backend::Trace;
use users_backend::domain::ports::UserStore;
use users_backend::domain::{UserName, UsersService};
use users_backend::inbound::http::router;
use users_backend::inbound::http::state::HttpState;
use users_backend::outbound::memory::InMemoryUserStore;

/// Names seeded by [`seeded_store`], receiving ids 1, 2 and 3.
pub const SEED_NAMES: [&str; 3] = ["alice", "bek", "chris"];

/// A fresh in-memory store seeded in one batch.
pub async fn seeded_store() -> Arc<InMemoryUserStore> {
    let store = Arc::new(InMemoryUserStore::new());
    let names: Vec<UserName> = SEED_NAMES
        .iter()
        .map(|name| UserName::new(*name).expect("seed name is valid"))
        .collect();
    store.bulk_create(&names).await.expect("seed users");
    store
}

/// Build an isolated application over `store`.
pub async fn init_app(
    store: Arc<InMemoryUserStore>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let service = UsersService::new(store);
    let state = HttpState::from_service(Arc::new(service));
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(router::configure),
    )
    .await
}

/// Decode a response body; empty bodies decode to `Value::Null`.
pub async fn json_body(response: ServiceResponse<BoxBody>) -> Value {
    let bytes = test::read_body(response).await;
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    }
}

/// Issue `request` against `app` and return the status with the decoded body.
pub async fn send<S>(app: &S, request: test::TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    (status, json_body(response).await)
}
