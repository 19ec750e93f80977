//! Task board API: board and column resources over HTTP.
//!
//! The crate follows a hexagonal layout. [`domain`] owns the documents,
//! error classification and ports; [`inbound`] adapts HTTP requests onto
//! the ports; [`outbound`] provides the in-memory store and the operator
//! failure log.

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
