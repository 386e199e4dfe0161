//! Users backend library.
//!
//! A CRUD HTTP service for a single `user` resource, laid out as ports and
//! adapters: [`domain`] holds the model and use-cases, [`inbound`] the HTTP
//! adapter, and [`outbound`] the in-memory and PostgreSQL stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
