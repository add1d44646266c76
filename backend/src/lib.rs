//! Blog backend library: posts and comments behind a session-authenticated
//! REST API.
//!
//! Business failures are collected by a request-scoped
//! [`domain::Notifier`] instead of being raised; infrastructure failures
//! travel as [`domain::Error`].

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
pub use settings::ServerSettings;
