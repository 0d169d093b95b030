//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: the login endpoint, the health probes, and the envelope
//! schemas they exchange. Swagger UI serves the document in debug builds.

use utoipa::OpenApi;

use crate::domain::{LoginInput, LoginOutput};
use crate::pipeline::Envelope;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "School management backend API",
        description = "Password-based login wrapped in the request-processing pipeline, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(LoginInput, LoginOutput, Envelope<LoginOutput>)),
    tags(
        (name = "auth", description = "Authentication operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
