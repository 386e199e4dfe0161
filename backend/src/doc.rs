//! OpenAPI documentation for the REST API.
//!
//! The generated document backs Swagger UI in debug builds and is printed by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, UserNameRequestSchema, UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users backend API",
        description = "CRUD interface for user records plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, UserNameRequestSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "User records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/users", &["get", "post"])]
    #[case("/users/{id}", &["get", "put", "delete"])]
    #[case("/health/ready", &["get"])]
    #[case("/health/live", &["get"])]
    fn document_lists_every_operation(#[case] path: &str, #[case] methods: &[&str]) {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("document serialises");
        let item = &doc["paths"][path];
        for method in methods {
            assert!(item.get(*method).is_some(), "{method} {path} missing");
        }
    }

    #[rstest]
    fn document_registers_schemas() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("document serialises");
        let schemas = &doc["components"]["schemas"];
        for name in ["User", "UserNameRequest", "Error", "ErrorCode"] {
            assert!(schemas.get(name).is_some(), "schema {name} missing");
        }
    }
}
