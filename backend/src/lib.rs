//! School-management backend core: the request-processing pipeline, the
//! login operation it wraps, and the HTTP surface relaying their envelopes.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod pipeline;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
