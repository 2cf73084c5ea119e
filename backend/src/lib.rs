//! Firearms licence registry backend.
//!
//! Hexagonal layout: [`domain`] holds the read models, query services and
//! ports; [`inbound`] adapts HTTP requests onto the query ports;
//! [`outbound`] implements the driven ports over PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
