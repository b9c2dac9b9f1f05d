//! Food product catalogue service.
//!
//! Layout follows ports and adapters: [`domain`] owns the model and the
//! rules, [`inbound`] turns HTTP into domain calls and [`outbound`] talks
//! to PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
